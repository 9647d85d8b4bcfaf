//! Subscription plan tiers and their effect on ranking.
//!
//! Enterprise and Pro rank equally for search purposes: both are "paid" and
//! sort ahead of Free. A paid tier only counts while the owning account's
//! subscription entitles it to paid features; otherwise the listing ranks
//! as Free.

/// Subscription level of a provider listing's owner.
///
/// # Examples
/// ```
/// use careatlas_core::PlanTier;
///
/// assert!(PlanTier::Pro.is_paid());
/// assert!(PlanTier::Enterprise.is_paid());
/// assert!(!PlanTier::Free.is_paid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PlanTier {
    /// No subscription; ranked last within a section.
    Free,
    /// Paid tier; ranked ahead of free listings.
    Pro,
    /// Paid tier; equal ranking priority to Pro.
    Enterprise,
}

impl PlanTier {
    /// Reports whether the tier carries paid ranking priority.
    #[must_use]
    pub const fn is_paid(self) -> bool {
        !matches!(self, Self::Free)
    }

    /// Returns the tier a listing actually ranks with.
    ///
    /// A paid tier downgrades to [`PlanTier::Free`] unless the subscription
    /// entitles the account to paid features. A missing status means the
    /// account never subscribed.
    ///
    /// # Examples
    /// ```
    /// use careatlas_core::{PlanTier, SubscriptionStatus};
    ///
    /// let tier = PlanTier::Pro;
    /// assert_eq!(tier.effective(Some(SubscriptionStatus::Active)), PlanTier::Pro);
    /// assert_eq!(tier.effective(Some(SubscriptionStatus::Canceled)), PlanTier::Free);
    /// assert_eq!(tier.effective(None), PlanTier::Free);
    /// ```
    #[must_use]
    pub fn effective(self, status: Option<SubscriptionStatus>) -> Self {
        if self == Self::Free {
            return Self::Free;
        }
        if status.is_some_and(SubscriptionStatus::entitles_paid_features) {
            self
        } else {
            Self::Free
        }
    }

    /// Return the tier as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
            Self::Enterprise => "enterprise",
        }
    }
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PlanTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Self::Free),
            "pro" => Ok(Self::Pro),
            "enterprise" => Ok(Self::Enterprise),
            _ => Err(format!("unknown plan tier '{s}'")),
        }
    }
}

/// Billing state of the owning account's subscription.
///
/// Mirrors the payment processor's status vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SubscriptionStatus {
    /// Paid and current.
    Active,
    /// In a trial period; treated as paid.
    Trialing,
    /// A renewal payment failed.
    PastDue,
    /// The subscription was cancelled.
    Canceled,
    /// Initial payment never completed.
    Incomplete,
}

impl SubscriptionStatus {
    /// Reports whether the status entitles the account to paid features.
    #[must_use]
    pub const fn entitles_paid_features(self) -> bool {
        matches!(self, Self::Active | Self::Trialing)
    }

    /// Return the status as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Trialing => "trialing",
            Self::PastDue => "past_due",
            Self::Canceled => "canceled",
            Self::Incomplete => "incomplete",
        }
    }
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SubscriptionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "trialing" => Ok(Self::Trialing),
            "past_due" => Ok(Self::PastDue),
            "canceled" => Ok(Self::Canceled),
            "incomplete" => Ok(Self::Incomplete),
            _ => Err(format!("unknown subscription status '{s}'")),
        }
    }
}
