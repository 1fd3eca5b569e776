pub trait FloatAsExt: Sized {
    /// Reject values indistinguishable from zero at the given tolerance.
    fn as_non_zero(self, eps: Self) -> Option<Self>;
}

impl FloatAsExt for f32 {
    fn as_non_zero(self, eps: f32) -> Option<f32> {
        if self.abs() <= eps {
            None
        } else {
            Some(self)
        }
    }
}
