//! Access decision logic.
//!
//! Pure evaluation of "may this user open this content item", combining
//! the user's entitlement with the content's tier and academic
//! requirements. The verdict is structured so callers can render a
//! precise "why" message; the reason contract is part of the public
//! interface, not an implementation detail.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::academic::{self, AcademicField};
use super::{PremiumTier, Purchase, UserEntitlement};

/// What a content item requires of its reader.
///
/// Each academic attribute is independently optional; an unspecified
/// requirement imposes no constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRequirements {
    pub tier: PremiumTier,
    pub university: Option<String>,
    pub degree: Option<String>,
    pub year: Option<String>,
    pub semester: Option<String>,
}

impl ContentRequirements {
    /// A requirement gated on tier only.
    pub fn tier_only(tier: PremiumTier) -> Self {
        Self {
            tier,
            university: None,
            degree: None,
            year: None,
            semester: None,
        }
    }

    fn specified(&self) -> impl Iterator<Item = (AcademicField, &str)> {
        [
            (AcademicField::University, self.university.as_deref()),
            (AcademicField::Degree, self.degree.as_deref()),
            (AcademicField::Year, self.year.as_deref()),
            (AcademicField::Semester, self.semester.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
    }
}

/// Snapshot of the user's premium standing at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPremiumStatus {
    pub is_active: bool,
    pub tier: Option<PremiumTier>,
    pub expiry_date: Option<Timestamp>,
    pub days_remaining: u32,
}

impl UserPremiumStatus {
    /// Derives the status view from an entitlement at `now`.
    pub fn from_entitlement(entitlement: &UserEntitlement, now: Timestamp) -> Self {
        Self {
            is_active: entitlement.is_active_at(now),
            tier: entitlement.tier,
            expiry_date: entitlement.expiry_date,
            days_remaining: entitlement.days_remaining(now),
        }
    }
}

/// One academic attribute that failed to match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicMismatch {
    pub field: AcademicField,
    pub required: String,
    pub actual: String,
}

/// Why access was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessDenialReason {
    NoPremium,
    InsufficientTier,
    AcademicMismatch,
}

/// The full allow/deny decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessVerdict {
    pub can_access: bool,
    pub reason: Option<AccessDenialReason>,
    /// Every mismatching academic attribute, not just the first.
    pub mismatches: Vec<AcademicMismatch>,
    pub user_status: UserPremiumStatus,
    pub requirements: ContentRequirements,
}

impl AccessVerdict {
    fn deny(
        reason: AccessDenialReason,
        mismatches: Vec<AcademicMismatch>,
        user_status: UserPremiumStatus,
        requirements: ContentRequirements,
    ) -> Self {
        Self {
            can_access: false,
            reason: Some(reason),
            mismatches,
            user_status,
            requirements,
        }
    }

    fn allow(user_status: UserPremiumStatus, requirements: ContentRequirements) -> Self {
        Self {
            can_access: true,
            reason: None,
            mismatches: vec![],
            user_status,
            requirements,
        }
    }
}

/// Evaluates access for a user against a content item.
///
/// `active_purchase` is the user's most recent currently active purchase;
/// academic attributes come from its frozen snapshot, never the live
/// profile. Tiers are nested supersets: a higher tier always satisfies a
/// lower requirement.
pub fn evaluate_access(
    entitlement: &UserEntitlement,
    active_purchase: Option<&Purchase>,
    requirements: &ContentRequirements,
    now: Timestamp,
) -> AccessVerdict {
    let user_status = UserPremiumStatus::from_entitlement(entitlement, now);

    let purchase = match active_purchase {
        Some(p) if p.is_active_at(now) && entitlement.is_active_at(now) => p,
        _ => {
            return AccessVerdict::deny(
                AccessDenialReason::NoPremium,
                vec![],
                user_status,
                requirements.clone(),
            )
        }
    };

    let user_tier = entitlement.tier.unwrap_or(purchase.tier);
    if !user_tier.satisfies(requirements.tier) {
        return AccessVerdict::deny(
            AccessDenialReason::InsufficientTier,
            vec![],
            user_status,
            requirements.clone(),
        );
    }

    let mismatches: Vec<AcademicMismatch> = requirements
        .specified()
        .filter_map(|(field, required)| {
            let actual = purchase.academic.field(field);
            if academic::matches(field, required, actual) {
                None
            } else {
                Some(AcademicMismatch {
                    field,
                    required: required.to_string(),
                    actual: actual.to_string(),
                })
            }
        })
        .collect();

    if !mismatches.is_empty() {
        return AccessVerdict::deny(
            AccessDenialReason::AcademicMismatch,
            mismatches,
            user_status,
            requirements.clone(),
        );
    }

    AccessVerdict::allow(user_status, requirements.clone())
}
