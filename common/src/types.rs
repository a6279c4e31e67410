pub struct Opts {
    pub verbose: bool,
    pub noop: bool,
}
