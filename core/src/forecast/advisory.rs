use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceStatus {
    Safe,
    Risk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hours {
    Finite(u64),
    Unbounded,
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hours::Finite(h) => write!(f, "{}h", h),
            Hours::Unbounded => write!(f, "∞"),
        }
    }
}

/// Safe: how many more hours can be missed. Risk: how many consecutive hours must be attended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advice {
    pub status: AdviceStatus,
    pub hours: Hours,
}

impl Advice {
    fn safe(hours: Hours) -> Self {
        Self { status: AdviceStatus::Safe, hours }
    }

    fn risk(hours: Hours) -> Self {
        Self { status: AdviceStatus::Risk, hours }
    }

    pub fn is_safe(&self) -> bool {
        self.status == AdviceStatus::Safe
    }
}

pub fn advise(attended: f64, conducted: f64, threshold_percent: f64) -> Advice {
    if conducted <= 0.0 {
        return Advice::safe(Hours::Finite(0));
    }

    let ratio = attended / conducted;
    let target = threshold_percent / 100.0;

    if ratio >= target {
        if target <= 0.0 {
            return Advice::safe(Hours::Unbounded);
        }
        let headroom = (attended / target - conducted).floor();
        return Advice::safe(Hours::Finite(headroom.max(0.0) as u64));
    }

    if target >= 1.0 {
        return Advice::risk(Hours::Unbounded);
    }

    // Solve (attended + x) / (conducted + x) = target for x.
    let recovery = ((target * conducted - attended) / (1.0 - target)).ceil();
    Advice::risk(Hours::Finite(recovery.max(0.0) as u64))
}
