use custom_error::custom_error;

custom_error! {
    /// Input rejected by `validate` and `try_launch`.
    #[derive(PartialEq)]
    pub LaunchError
    ZeroDirection {ray: usize} = "degenerate input: ray {ray} has a zero-length direction",
    NegativeRadius {sphere: usize, radius: f64} = "degenerate input: sphere {sphere} has invalid radius {radius}",
}

custom_error! {pub SceneError
    Io {source: std::io::Error} = "failed to read scene: {source}",
    Parse {source: serde_json::Error} = "failed to parse scene: {source}",
}
