use serde::Serialize;

/// Shown for every request until dispatch times are wired in per district.
pub const DEFAULT_ETA: &str = "20–40 minutes";

const BASE_PRICE: u32 = 1500;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Service {
    #[default]
    Tow,
    Tech,
    Fuel,
    Sober,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Vehicle {
    #[default]
    Light,
    Suv,
    Moto,
    Other,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Situation {
    #[default]
    Normal,
    Wheels,
    Ditch,
    Battery,
    NoFuel,
}

impl Service {
    pub const ALL: [Service; 4] = [Service::Tow, Service::Tech, Service::Fuel, Service::Sober];

    pub fn as_str(self) -> &'static str {
        match self {
            Service::Tow => "tow",
            Service::Tech => "tech",
            Service::Fuel => "fuel",
            Service::Sober => "sober",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Service::Tow => "Tow truck",
            Service::Tech => "Technical assistance",
            Service::Fuel => "Fuel delivery",
            Service::Sober => "Sober driver",
        }
    }

    /// Unknown or empty values fall back to the default service.
    pub fn from_field(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == value)
            .unwrap_or_default()
    }
}

impl Vehicle {
    pub const ALL: [Vehicle; 4] = [Vehicle::Light, Vehicle::Suv, Vehicle::Moto, Vehicle::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Vehicle::Light => "light",
            Vehicle::Suv => "suv",
            Vehicle::Moto => "moto",
            Vehicle::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Vehicle::Light => "Passenger car",
            Vehicle::Suv => "SUV / crossover",
            Vehicle::Moto => "Motorcycle",
            Vehicle::Other => "Other",
        }
    }

    pub fn from_field(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == value)
            .unwrap_or_default()
    }
}

impl Situation {
    pub const ALL: [Situation; 5] = [
        Situation::Normal,
        Situation::Wheels,
        Situation::Ditch,
        Situation::Battery,
        Situation::NoFuel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Situation::Normal => "normal",
            Situation::Wheels => "wheels",
            Situation::Ditch => "ditch",
            Situation::Battery => "battery",
            Situation::NoFuel => "no-fuel",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Situation::Normal => "Regular pickup",
            Situation::Wheels => "Wheels locked",
            Situation::Ditch => "Stuck in a ditch",
            Situation::Battery => "Dead battery",
            Situation::NoFuel => "Out of fuel",
        }
    }

    pub fn from_field(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == value)
            .unwrap_or_default()
    }
}

/// Current selection of the calculator form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CalcInput {
    pub service: Service,
    pub vehicle: Vehicle,
    pub situation: Situation,
}

impl CalcInput {
    pub fn from_fields(service: &str, vehicle: &str, situation: &str) -> Self {
        Self {
            service: Service::from_field(service),
            vehicle: Vehicle::from_field(vehicle),
            situation: Situation::from_field(situation),
        }
    }

    pub fn estimate(&self) -> Estimate {
        estimate(self.service, self.vehicle, self.situation)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Estimate {
    pub price_from: u32,
    pub eta: &'static str,
}

/// Rough "from" price for a call-out. The rules are applied in order and each
/// one sees the price left by the previous step.
pub fn estimate(service: Service, vehicle: Vehicle, situation: Situation) -> Estimate {
    let mut price_from = match service {
        Service::Tow => BASE_PRICE,
        Service::Tech => 1200,
        Service::Fuel => 1000,
        Service::Sober => 2000,
    };

    price_from = match vehicle {
        Vehicle::Light => price_from,
        Vehicle::Suv => price_from + 200,
        Vehicle::Other => price_from + 400,
        Vehicle::Moto => price_from.saturating_sub(200).max(1200),
    };

    price_from = match (situation, service) {
        (Situation::Wheels, _) => price_from + 400,
        (Situation::Ditch, _) => price_from + 600,
        (Situation::Battery, Service::Tech) => price_from.saturating_sub(100).max(1000),
        (Situation::NoFuel, Service::Fuel) => price_from.saturating_sub(100).max(900),
        _ => price_from,
    };

    Estimate {
        price_from,
        eta: DEFAULT_ETA,
    }
}

/// Groups thousands the way ru-RU does (no-break space) and appends the
/// currency suffix, e.g. `1 500 ₽`.
pub fn format_price(amount: u32, currency_suffix: &str) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(ch);
    }
    format!("{} {}", grouped, currency_suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn base_call_out() {
        assert_eq!(
            estimate(Service::Tow, Vehicle::Light, Situation::Normal),
            Estimate { price_from: 1500, eta: "20–40 minutes" }
        );
    }

    #[test]
    fn battery_discount_only_for_tech_help() {
        assert_eq!(estimate(Service::Tech, Vehicle::Light, Situation::Battery).price_from, 1100);
        assert_eq!(estimate(Service::Tow, Vehicle::Light, Situation::Battery).price_from, 1500);
    }

    #[test]
    fn moto_floor_then_fuel_discount() {
        // 1000 -> max(1200, 800) -> max(900, 1100)
        assert_eq!(estimate(Service::Fuel, Vehicle::Moto, Situation::NoFuel).price_from, 1100);
        assert_eq!(estimate(Service::Sober, Vehicle::Moto, Situation::Normal).price_from, 1800);
    }

    #[test]
    fn surcharges_stack() {
        assert_eq!(estimate(Service::Sober, Vehicle::Other, Situation::Ditch).price_from, 3000);
        assert_eq!(estimate(Service::Tow, Vehicle::Suv, Situation::Wheels).price_from, 2100);
    }

    #[test]
    fn no_fuel_ignored_for_other_services() {
        assert_eq!(estimate(Service::Tech, Vehicle::Light, Situation::NoFuel).price_from, 1200);
    }

    #[test]
    fn every_combination_is_stable() {
        for s in Service::ALL {
            for v in Vehicle::ALL {
                for c in Situation::ALL {
                    let first = estimate(s, v, c);
                    assert_eq!(first, estimate(s, v, c));
                    assert_eq!(first.eta, DEFAULT_ETA);
                    assert!(first.price_from >= 900);
                }
            }
        }
    }

    #[test]
    fn unset_fields_use_defaults() {
        assert_eq!(CalcInput::from_fields("", "", ""), CalcInput::default());
        assert_eq!(
            CalcInput::from_fields("fuel", "hovercraft", "no-fuel"),
            CalcInput {
                service: Service::Fuel,
                vehicle: Vehicle::Light,
                situation: Situation::NoFuel,
            }
        );
    }

    #[test]
    fn price_grouping() {
        assert_eq!(format_price(900, "₽"), "900 ₽");
        assert_eq!(format_price(1500, "₽"), "1\u{a0}500 ₽");
        assert_eq!(format_price(12000, "₽"), "12\u{a0}000 ₽");
        assert_eq!(format_price(1_234_567, "₽"), "1\u{a0}234\u{a0}567 ₽");
    }
}
