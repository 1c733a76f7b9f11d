mod resolver_tests;
mod session_tests;
