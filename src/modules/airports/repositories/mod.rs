pub mod airport_repository;
