/// Configuration for [`crate::WindowManager`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowOptions {
    /// How many viewport heights worth of rows the window tries to hold.
    pub budget_screens: u32,
    /// The viewport height is divided by this to get the look-ahead used when the window
    /// is re-anchored (`2` looks half a viewport past the scroll offset).
    pub lead_divisor: u32,
    /// Whether every structural recompute re-validates the whole table (and panics on a
    /// violated invariant). Defaults to on in debug builds.
    pub check_invariants: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowOptions {
    pub fn new() -> Self {
        Self {
            budget_screens: 2,
            lead_divisor: 2,
            check_invariants: cfg!(debug_assertions),
        }
    }

    pub fn with_budget_screens(mut self, budget_screens: u32) -> Self {
        self.budget_screens = budget_screens.max(1);
        self
    }

    pub fn with_lead_divisor(mut self, lead_divisor: u32) -> Self {
        self.lead_divisor = lead_divisor.max(1);
        self
    }

    pub fn with_check_invariants(mut self, check_invariants: bool) -> Self {
        self.check_invariants = check_invariants;
        self
    }

    /// Height the window tries to cover for a viewport of `viewport_height`.
    pub(crate) fn budget(&self, viewport_height: u32) -> u64 {
        viewport_height as u64 * self.budget_screens.max(1) as u64
    }

    pub(crate) fn lead(&self, viewport_height: u32) -> u64 {
        (viewport_height / self.lead_divisor.max(1)) as u64
    }
}
