// Storefront data and view logic
// Pure functions over the sample catalog, plans and account data

pub mod account;
pub mod catalog;
pub mod pricing;
