//! Pricing model and currency conversion
//!
//! Prices are defined once in USD and converted with an exchange-rate table.
//! The same rate types are used by the `/api/exchange-rates` endpoint and by
//! the pricing page that consumes it.

use serde::{Deserialize, Serialize};

/// Supported display currencies
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    CHF,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::USD, Currency::EUR, Currency::CHF];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::CHF => "CHF",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::CHF => "CHF ",
        }
    }

    /// Label used in the currency selector
    pub fn label(&self) -> &'static str {
        match self {
            Currency::USD => "USD ($)",
            Currency::EUR => "EUR (€)",
            Currency::CHF => "CHF",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "CHF" => Some(Currency::CHF),
            _ => None,
        }
    }

    /// Format an amount with this currency's symbol
    pub fn format(&self, amount: u64) -> String {
        format!("{}{}", self.symbol(), amount)
    }
}

/// Billing period of the subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingCycle {
    Monthly,
    #[default]
    Annual,
}

/// Exchange rates relative to USD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRates {
    #[serde(rename = "USD")]
    pub usd: f64,
    #[serde(rename = "EUR")]
    pub eur: f64,
    #[serde(rename = "CHF")]
    pub chf: f64,
}

/// Static rates used whenever live data is unavailable
pub const FALLBACK_RATES: ExchangeRates = ExchangeRates {
    usd: 1.0,
    eur: 0.9,
    chf: 0.92,
};

impl ExchangeRates {
    /// Build a table from possibly bad values, replacing each unusable rate
    /// with its fallback. USD is always 1.
    pub fn sanitized(eur: Option<f64>, chf: Option<f64>) -> Self {
        fn usable(rate: Option<f64>, fallback: f64) -> f64 {
            rate.filter(|r| r.is_finite() && *r > 0.0).unwrap_or(fallback)
        }

        Self {
            usd: 1.0,
            eur: usable(eur, FALLBACK_RATES.eur),
            chf: usable(chf, FALLBACK_RATES.chf),
        }
    }

    pub fn rate(&self, currency: Currency) -> f64 {
        match currency {
            Currency::USD => self.usd,
            Currency::EUR => self.eur,
            Currency::CHF => self.chf,
        }
    }

    /// Convert a USD amount, rounded to a non-negative integer
    pub fn convert(&self, amount_usd: u64, currency: Currency) -> u64 {
        let converted = (amount_usd as f64 * self.rate(currency)).round();
        if converted.is_finite() && converted > 0.0 {
            converted as u64
        } else {
            0
        }
    }
}

impl Default for ExchangeRates {
    fn default() -> Self {
        FALLBACK_RATES
    }
}

/// Payload of `GET /api/exchange-rates`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatesResponse {
    pub success: bool,
    pub rates: ExchangeRates,
    /// RFC 3339 timestamp of the rate data
    pub last_update: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Message attached to fallback responses
pub const FALLBACK_MESSAGE: &str = "Using fallback rates";

impl RatesResponse {
    pub fn live(rates: ExchangeRates, last_update: impl Into<String>) -> Self {
        Self {
            success: true,
            rates,
            last_update: last_update.into(),
            error: None,
        }
    }

    pub fn fallback(last_update: impl Into<String>) -> Self {
        Self {
            success: false,
            rates: FALLBACK_RATES,
            last_update: last_update.into(),
            error: Some(FALLBACK_MESSAGE.to_string()),
        }
    }
}

/// Origin of the rates shown on the pricing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RateStatus {
    /// Request in flight; the fallback table is shown meanwhile
    #[default]
    Loading,
    Live,
    Fallback,
}

impl RateStatus {
    /// Status and table to display once the endpoint answered; `None` means
    /// the request itself failed.
    pub fn resolve(response: Option<RatesResponse>) -> (Self, ExchangeRates) {
        match response {
            Some(response) if response.success => (RateStatus::Live, response.rates),
            _ => (RateStatus::Fallback, FALLBACK_RATES),
        }
    }
}

/// Base prices in USD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceTable {
    pub monthly: u64,
    pub annual: u64,
    pub installation: u64,
}

/// The single "complete package" plan
pub const BASE_PRICES: PriceTable = PriceTable {
    monthly: 186,
    annual: 1874,
    installation: 125,
};

/// Display prices for one currency and billing cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuote {
    pub currency: Currency,
    pub cycle: BillingCycle,
    /// Converted monthly subscription price
    pub monthly: u64,
    /// Converted annual subscription price
    pub annual: u64,
    /// Converted one-time installation fee
    pub installation: u64,
}

impl PriceQuote {
    pub fn compute(
        table: &PriceTable,
        currency: Currency,
        cycle: BillingCycle,
        rates: &ExchangeRates,
    ) -> Self {
        Self {
            currency,
            cycle,
            monthly: rates.convert(table.monthly, currency),
            annual: rates.convert(table.annual, currency),
            installation: rates.convert(table.installation, currency),
        }
    }

    /// Amount billed per billing period
    pub fn billed(&self) -> u64 {
        match self.cycle {
            BillingCycle::Monthly => self.monthly,
            BillingCycle::Annual => self.annual,
        }
    }

    /// Headline "per month" figure
    pub fn per_month(&self) -> u64 {
        match self.cycle {
            BillingCycle::Monthly => self.monthly,
            BillingCycle::Annual => (self.annual as f64 / 12.0).round() as u64,
        }
    }

    /// Percentage saved by paying annually instead of twelve monthly payments
    pub fn annual_savings_percent(&self) -> u64 {
        let yearly_monthly = self.monthly * 12;
        if yearly_monthly == 0 || self.annual >= yearly_monthly {
            return 0;
        }
        let saved = (yearly_monthly - self.annual) as f64;
        (saved / yearly_monthly as f64 * 100.0).round() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_status_resolution() {
        let live = ExchangeRates {
            usd: 1.0,
            eur: 0.95,
            chf: 0.88,
        };
        assert_eq!(RateStatus::default(), RateStatus::Loading);
        assert_eq!(
            RateStatus::resolve(Some(RatesResponse::live(live, "2024-01-01T00:00:00.000Z"))),
            (RateStatus::Live, live)
        );
        assert_eq!(
            RateStatus::resolve(Some(RatesResponse::fallback("2024-01-01T00:00:00.000Z"))),
            (RateStatus::Fallback, FALLBACK_RATES)
        );
        assert_eq!(RateStatus::resolve(None), (RateStatus::Fallback, FALLBACK_RATES));
    }

    #[test]
    fn test_fallback_conversion_of_monthly_price() {
        assert_eq!(FALLBACK_RATES.convert(186, Currency::USD), 186);
        assert_eq!(FALLBACK_RATES.convert(186, Currency::EUR), 167);
        assert_eq!(FALLBACK_RATES.convert(186, Currency::CHF), 171);
    }

    #[test]
    fn test_quote_in_eur() {
        let quote = PriceQuote::compute(
            &BASE_PRICES,
            Currency::EUR,
            BillingCycle::Annual,
            &FALLBACK_RATES,
        );
        assert_eq!(quote.monthly, 167);
        assert_eq!(quote.annual, 1687);
        assert_eq!(quote.installation, 113);
        assert_eq!(quote.billed(), 1687);
        assert_eq!(quote.per_month(), 141);
    }

    #[test]
    fn test_monthly_cycle() {
        let quote = PriceQuote::compute(
            &BASE_PRICES,
            Currency::USD,
            BillingCycle::Monthly,
            &FALLBACK_RATES,
        );
        assert_eq!(quote.billed(), 186);
        assert_eq!(quote.per_month(), 186);
    }

    #[test]
    fn test_annual_savings() {
        let quote = PriceQuote::compute(
            &BASE_PRICES,
            Currency::USD,
            BillingCycle::Annual,
            &FALLBACK_RATES,
        );
        // 12 * 186 = 2232, saving 358
        assert_eq!(quote.annual_savings_percent(), 16);

        let free = PriceQuote {
            monthly: 0,
            annual: 0,
            ..quote
        };
        assert_eq!(free.annual_savings_percent(), 0);
    }

    #[test]
    fn test_sanitized_rates() {
        let rates = ExchangeRates::sanitized(Some(0.95), None);
        assert_eq!(rates.usd, 1.0);
        assert_eq!(rates.eur, 0.95);
        assert_eq!(rates.chf, 0.92);

        let rates = ExchangeRates::sanitized(Some(-1.0), Some(f64::NAN));
        assert_eq!(rates, FALLBACK_RATES);

        let rates = ExchangeRates::sanitized(Some(0.0), Some(0.88));
        assert_eq!(rates.eur, 0.9);
        assert_eq!(rates.chf, 0.88);
    }

    #[test]
    fn test_conversion_never_negative() {
        let broken = ExchangeRates {
            usd: 1.0,
            eur: -3.0,
            chf: f64::INFINITY,
        };
        assert_eq!(broken.convert(100, Currency::EUR), 0);
        assert_eq!(broken.convert(100, Currency::CHF), 0);
    }

    #[test]
    fn test_currency_codes() {
        for currency in Currency::ALL {
            assert_eq!(Currency::from_code(currency.code()), Some(currency));
        }
        assert_eq!(Currency::from_code(" eur "), Some(Currency::EUR));
        assert_eq!(Currency::from_code("GBP"), None);
        assert_eq!(Currency::CHF.format(171), "CHF 171");
        assert_eq!(Currency::EUR.format(167), "€167");
    }

    #[test]
    fn test_response_json_shape() {
        let response = RatesResponse::fallback("2025-01-01T00:00:00Z");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["rates"]["USD"], 1.0);
        assert_eq!(json["rates"]["EUR"], 0.9);
        assert_eq!(json["rates"]["CHF"], 0.92);
        assert_eq!(json["lastUpdate"], "2025-01-01T00:00:00Z");
        assert_eq!(json["error"], "Using fallback rates");

        let live = RatesResponse::live(FALLBACK_RATES, "x");
        let json = serde_json::to_value(&live).unwrap();
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_response_parses_without_error_field() {
        let parsed: RatesResponse = serde_json::from_str(
            r#"{"success":true,"rates":{"USD":1,"EUR":0.93,"CHF":0.89},"lastUpdate":"now"}"#,
        )
        .unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.rates.eur, 0.93);
        assert_eq!(parsed.error, None);
    }
}
