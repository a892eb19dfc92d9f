pub mod filter;
pub mod ranking;
pub mod summary;
pub mod trip;

/// Fixed placeholder data, used when no backend is available.
pub trait ExampleData {
    fn example_data() -> Self;
}
