pub mod gift_repository;
