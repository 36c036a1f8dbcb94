//! Promo code models.
//!
//! This module defines the [`PromoCode`] record, its [`PromoKind`] and the
//! reasons a code can be turned away at booking time.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What a promo code does to a booking's amounts.
///
/// # Example
///
/// ```
/// use trailer_booking_engine::models::PromoKind;
/// use rust_decimal::Decimal;
///
/// let kind: PromoKind = serde_json::from_str(r#"{"type": "percentage", "percent": "0.20"}"#).unwrap();
/// assert_eq!(kind, PromoKind::Percentage { percent: Decimal::new(20, 2) });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PromoKind {
    /// Takes a fraction off the total, never below the deposit.
    Percentage {
        /// The fraction taken off, in `(0, 1]`.
        percent: Decimal,
    },
    /// Waives the online deposit for bookings paid out-of-band.
    FullBypass,
    /// Makes the booking free.
    FullDiscount,
}

impl std::fmt::Display for PromoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromoKind::Percentage { percent } => {
                write!(f, "{}% off", (*percent * Decimal::ONE_HUNDRED).normalize())
            }
            PromoKind::FullBypass => write!(f, "Deposit bypass"),
            PromoKind::FullDiscount => write!(f, "Full discount"),
        }
    }
}

/// A promo code as stored by the admin panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoCode {
    /// The code customers type in.
    pub code: String,
    /// What the code does.
    pub kind: PromoKind,
    /// Whether an admin has left the code switched on.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// When the code stops working, if ever.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    /// The number of bookings the code may be used on, if capped.
    #[serde(default)]
    pub max_uses: Option<u32>,
    /// The number of bookings the code has already been used on.
    #[serde(default)]
    pub current_uses: u32,
}

fn default_true() -> bool {
    true
}

/// Why a promo code was not applied.
///
/// A rejection is reported back to the customer and the booking continues
/// without a promo; it is never a failure of the booking itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum PromoRejection {
    /// No code with that name exists.
    Unknown {
        /// The code as entered.
        code: String,
    },
    /// The code has been switched off.
    Inactive {
        /// The code.
        code: String,
    },
    /// The code's expiry has passed.
    Expired {
        /// The code.
        code: String,
        /// When the code expired.
        expired_at: DateTime<Utc>,
    },
    /// The code has reached its use cap.
    Exhausted {
        /// The code.
        code: String,
        /// The use cap.
        max_uses: u32,
    },
    /// The code's discount is set up in a way that cannot be applied.
    Misconfigured {
        /// The code.
        code: String,
        /// What is wrong with it.
        message: String,
    },
}

impl std::fmt::Display for PromoRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromoRejection::Unknown { code } => {
                write!(f, "Promo code '{}' was not found", code)
            }
            PromoRejection::Inactive { code } => {
                write!(f, "Promo code '{}' is no longer active", code)
            }
            PromoRejection::Expired { code, expired_at } => write!(
                f,
                "Promo code '{}' expired on {}",
                code,
                expired_at.date_naive()
            ),
            PromoRejection::Exhausted { code, max_uses } => write!(
                f,
                "Promo code '{}' has reached its limit of {} uses",
                code, max_uses
            ),
            PromoRejection::Misconfigured { code, message } => {
                write!(f, "Promo code '{}' cannot be applied: {}", code, message)
            }
        }
    }
}

impl PromoCode {
    /// Checks whether the code can be used at `now`.
    ///
    /// A code is usable while it is active, unexpired, under its use cap and
    /// carries a percentage in `(0, 1]` if it is a percentage code.
    ///
    /// # Example
    ///
    /// ```
    /// use trailer_booking_engine::models::{PromoCode, PromoKind, PromoRejection};
    /// use chrono::Utc;
    ///
    /// let promo = PromoCode {
    ///     code: "CASHPAY".to_string(),
    ///     kind: PromoKind::FullBypass,
    ///     is_active: true,
    ///     expires_at: None,
    ///     max_uses: Some(1),
    ///     current_uses: 1,
    /// };
    ///
    /// assert!(matches!(
    ///     promo.check_usable(Utc::now()),
    ///     Err(PromoRejection::Exhausted { .. })
    /// ));
    /// ```
    pub fn check_usable(&self, now: DateTime<Utc>) -> Result<(), PromoRejection> {
        if !self.is_active {
            return Err(PromoRejection::Inactive {
                code: self.code.clone(),
            });
        }
        if let Some(expired_at) = self.expires_at.filter(|expires_at| *expires_at <= now) {
            return Err(PromoRejection::Expired {
                code: self.code.clone(),
                expired_at,
            });
        }
        if let Some(max_uses) = self.max_uses.filter(|max| self.current_uses >= *max) {
            return Err(PromoRejection::Exhausted {
                code: self.code.clone(),
                max_uses,
            });
        }
        if let PromoKind::Percentage { percent } = self.kind {
            if percent <= Decimal::ZERO || percent > Decimal::ONE {
                return Err(PromoRejection::Misconfigured {
                    code: self.code.clone(),
                    message: format!("percentage {} is outside (0, 1]", percent),
                });
            }
        }
        Ok(())
    }

    /// Returns a copy of the code with one more use recorded.
    pub fn record_use(&self) -> PromoCode {
        PromoCode {
            current_uses: self.current_uses.saturating_add(1),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn create_test_promo(kind: PromoKind) -> PromoCode {
        PromoCode {
            code: "SPRING20".to_string(),
            kind,
            is_active: true,
            expires_at: None,
            max_uses: None,
            current_uses: 0,
        }
    }

    #[test]
    fn test_active_unexpired_code_is_usable() {
        let promo = create_test_promo(PromoKind::Percentage {
            percent: dec("0.20"),
        });
        assert!(promo.check_usable(now()).is_ok());
    }

    #[test]
    fn test_inactive_code_is_rejected() {
        let promo = PromoCode {
            is_active: false,
            ..create_test_promo(PromoKind::FullDiscount)
        };
        assert_eq!(
            promo.check_usable(now()),
            Err(PromoRejection::Inactive {
                code: "SPRING20".to_string()
            })
        );
    }

    #[test]
    fn test_expired_code_is_rejected() {
        let expired_at = now() - Duration::days(1);
        let promo = PromoCode {
            expires_at: Some(expired_at),
            ..create_test_promo(PromoKind::FullDiscount)
        };

        let rejection = promo.check_usable(now()).unwrap_err();
        assert_eq!(
            rejection,
            PromoRejection::Expired {
                code: "SPRING20".to_string(),
                expired_at,
            }
        );
        assert_eq!(
            rejection.to_string(),
            "Promo code 'SPRING20' expired on 2026-02-28"
        );
    }

    #[test]
    fn test_code_expiring_later_is_usable() {
        let promo = PromoCode {
            expires_at: Some(now() + Duration::hours(1)),
            ..create_test_promo(PromoKind::FullBypass)
        };
        assert!(promo.check_usable(now()).is_ok());
    }

    #[test]
    fn test_exhausted_code_is_rejected() {
        let promo = PromoCode {
            max_uses: Some(5),
            current_uses: 5,
            ..create_test_promo(PromoKind::FullBypass)
        };
        assert_eq!(
            promo.check_usable(now()),
            Err(PromoRejection::Exhausted {
                code: "SPRING20".to_string(),
                max_uses: 5,
            })
        );
    }

    #[test]
    fn test_percentage_above_one_is_misconfigured() {
        let promo = create_test_promo(PromoKind::Percentage {
            percent: dec("1.5"),
        });
        assert!(matches!(
            promo.check_usable(now()),
            Err(PromoRejection::Misconfigured { .. })
        ));
    }

    #[test]
    fn test_zero_percentage_is_misconfigured() {
        let promo = create_test_promo(PromoKind::Percentage {
            percent: Decimal::ZERO,
        });
        assert!(matches!(
            promo.check_usable(now()),
            Err(PromoRejection::Misconfigured { .. })
        ));
    }

    #[test]
    fn test_record_use_returns_incremented_copy() {
        let promo = PromoCode {
            max_uses: Some(2),
            current_uses: 1,
            ..create_test_promo(PromoKind::FullBypass)
        };

        let used = promo.record_use();
        assert_eq!(used.current_uses, 2);
        assert_eq!(promo.current_uses, 1);
        assert!(used.check_usable(now()).is_err());
    }

    #[test]
    fn test_promo_kind_display() {
        let kind = PromoKind::Percentage {
            percent: dec("0.20"),
        };
        assert_eq!(kind.to_string(), "20% off");
        assert_eq!(PromoKind::FullBypass.to_string(), "Deposit bypass");
    }

    #[test]
    fn test_promo_code_deserializes_with_defaults() {
        let json = r#"{
            "code": "CASHPAY",
            "kind": {"type": "full_bypass"}
        }"#;

        let promo: PromoCode = serde_json::from_str(json).unwrap();
        assert!(promo.is_active);
        assert_eq!(promo.kind, PromoKind::FullBypass);
        assert_eq!(promo.current_uses, 0);
        assert!(promo.max_uses.is_none());
    }
}
