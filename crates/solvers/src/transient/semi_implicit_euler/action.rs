/// Control actions supported by the semi-implicit Euler solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop integrating and return the samples computed so far.
    StopEarly,
}
