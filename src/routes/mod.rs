pub mod recommendation_routes;
