// Domain layer - Dashboard data and the fixed datasets it is rendered from
pub mod activity;
pub mod health;
pub mod metrics;
pub mod navigation;
pub mod pages;
pub mod task;
