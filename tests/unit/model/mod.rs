mod test_entity;
mod test_requests;
mod test_responses;
mod test_retry;
