// Scenarios module
// Contains the simulated-user scenario definitions

pub mod website;
