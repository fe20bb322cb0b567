pub mod analysis;
pub mod geocoder;
pub mod irradiance;
pub mod recommendation_service;

#[cfg(test)]
pub mod testing;
