
pub use hit_test::HitTest;
