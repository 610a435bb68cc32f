mod viewport;

pub use viewport::ViewportMapper;
