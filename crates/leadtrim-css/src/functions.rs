//! Host functions
//!
//! Generated fragments call `pow()`, which plain Sass does not provide. The
//! host compiler registers these before compiling anything we emit.

/// A numeric function the host compiler must expose
#[derive(Debug, Clone, Copy)]
pub struct HostFunction {
    /// Sass signature, e.g. `pow($num, $pow)`
    pub signature: &'static str,
    arity: usize,
    func: fn(&[f64]) -> f64,
}

impl HostFunction {
    /// Function name without the parameter list
    pub fn name(&self) -> &'static str {
        self.signature
            .split_once('(')
            .map_or(self.signature, |(name, _)| name)
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Evaluate, or `None` on an argument count mismatch
    pub fn call(&self, args: &[f64]) -> Option<f64> {
        (args.len() == self.arity).then(|| (self.func)(args))
    }
}

static HOST_FUNCTIONS: [HostFunction; 1] = [HostFunction {
    signature: "pow($num, $pow)",
    arity: 2,
    func: |args| args[0].powf(args[1]),
}];

pub fn host_functions() -> &'static [HostFunction] {
    &HOST_FUNCTIONS
}
