mod test_file_store;
mod test_memory_store;
