// Cloud provisioner client
pub mod cloud_client;
pub mod cloud_model;
pub mod provisioner_client;

// Pillar server client
pub mod pillar_client;

#[cfg(test)]
pub mod mock_cloud_client;
