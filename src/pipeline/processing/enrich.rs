use chrono::NaiveDateTime;

/// Billing cadence qualifier attached to non-purchase listings.
///
/// Every recognized interval string is enumerated explicitly; anything the
/// sources emit beyond this list falls into `Other` and behaves like an
/// outright price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentInterval {
    /// No interval given (typical for purchase listings).
    Unspecified,
    /// One-off payment.
    Once,
    /// Monthly amount for the whole unit.
    PerMonth,
    /// Annual amount for the whole unit.
    PerYear,
    /// Rate quoted per square meter, monthly cadence implied.
    PerSquareMeter,
    /// Rate quoted per square meter with explicit monthly cadence.
    PerMonthPerSquareMeter,
    /// Rate quoted per square meter, covering a full year.
    PerYearPerSquareMeter,
    /// Unrecognized label.
    Other,
}

impl PaymentInterval {
    /// Parse a raw interval label, case-insensitively.
    pub fn parse(raw: Option<&str>) -> Self {
        let label = raw.unwrap_or_default().trim().to_lowercase();
        match label.as_str() {
            "" => PaymentInterval::Unspecified,
            "once" => PaymentInterval::Once,
            "per_month" => PaymentInterval::PerMonth,
            "per_year" => PaymentInterval::PerYear,
            "per_square_meter" => PaymentInterval::PerSquareMeter,
            "per_month_per_square_meter" => PaymentInterval::PerMonthPerSquareMeter,
            "per_year_per_square_meter" => PaymentInterval::PerYearPerSquareMeter,
            _ => PaymentInterval::Other,
        }
    }

    /// Whether the price is quoted per unit of living area rather than for
    /// the whole unit.
    pub fn is_area_rate(self) -> bool {
        matches!(
            self,
            PaymentInterval::PerSquareMeter
                | PaymentInterval::PerMonthPerSquareMeter
                | PaymentInterval::PerYearPerSquareMeter
        )
    }

    /// Whether the quoted amount covers a full year.
    pub fn is_annual(self) -> bool {
        matches!(
            self,
            PaymentInterval::PerYear | PaymentInterval::PerYearPerSquareMeter
        )
    }
}

/// Length and word-count statistics over canonicalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    pub length: usize,
    pub word_count: usize,
}

/// Stateless derivation of engineered features from already-parsed fields.
pub struct FeatureEngineer;

impl FeatureEngineer {
    /// Price normalized to a monthly per-square-meter basis.
    ///
    /// A non-positive living area short-circuits to 0.0 regardless of the
    /// price. Per-area intervals use the price itself as the rate; an annual
    /// per-area rate is scaled down to its monthly equivalent. Everything
    /// else divides the price by the living area. Two-decimal rounding.
    pub fn price_per_sqm(price: i64, living_space: f64, interval: PaymentInterval) -> f64 {
        if living_space <= 0.0 {
            return 0.0;
        }

        let price = price as f64;
        if interval.is_area_rate() {
            if interval.is_annual() {
                round2(price / 12.0)
            } else {
                round2(price)
            }
        } else {
            round2(price / living_space)
        }
    }

    /// Years between the build year and the reference year.
    ///
    /// `None` when either side is unknown, when the build year is 0 (a
    /// sentinel, not a year) or when it lies after the reference year.
    pub fn age(build_year: Option<i32>, reference_year: Option<i32>) -> Option<i32> {
        let year = build_year?;
        let reference = reference_year?;
        if year == 0 || year > reference {
            return None;
        }
        Some(reference - year)
    }

    /// Whole days between publication and crawl.
    ///
    /// `None` unless both timestamps resolved. A negative span (published
    /// after the crawl) is surfaced as-is; it marks a data-quality anomaly
    /// the downstream consumer should see.
    pub fn days_since_published(
        published: Option<NaiveDateTime>,
        crawl: Option<NaiveDateTime>,
    ) -> Option<i64> {
        let published = published?.date();
        let crawl = crawl?.date();
        Some((crawl - published).num_days())
    }

    /// Character and whitespace-token counts of an already-canonical string.
    pub fn text_stats(text: &str) -> TextStats {
        TextStats {
            length: text.chars().count(),
            word_count: text.split_whitespace().count(),
        }
    }
}

/// Round to two decimals, halves away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
