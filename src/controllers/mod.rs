pub mod recommendation_controller;
