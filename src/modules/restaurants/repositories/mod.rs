pub mod restaurant_repository;
