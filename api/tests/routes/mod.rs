mod debug_test;
mod health_test;
mod resources_test;
mod startup_test;
