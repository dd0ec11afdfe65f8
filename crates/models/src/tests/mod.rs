/// Entity round-trips and audit columns
pub mod crud_tests;
