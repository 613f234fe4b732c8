//! Movement domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use beehive_shared::types::{AccountId, MovementId};

/// Direction of a movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MovementType {
    /// Money entering the account.
    Income,
    /// Money leaving the account.
    Expense,
}

impl std::fmt::Display for MovementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => write!(f, "INCOME"),
            Self::Expense => write!(f, "EXPENSE"),
        }
    }
}

/// Lifecycle status of a movement or planned transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MovementStatus {
    /// Booked but not yet settled.
    Pending,
    /// Settled; the only status that affects an account balance.
    Confirmed,
    /// Cancelled before settlement.
    Cancelled,
    /// Settlement failed.
    Failed,
}

impl MovementStatus {
    /// Whether a transaction in this status counts toward projections and
    /// expected-impact sums.
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Cancelled | Self::Failed)
    }
}

/// Macro to generate the fixed category set with its wire names.
macro_rules! movement_categories {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Category tag classifying a movement for reporting and analytics.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum MovementCategory {
            $(
                #[allow(missing_docs)]
                $variant,
            )+
        }

        impl MovementCategory {
            /// Returns the canonical upper-snake name.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }
    };
}

movement_categories! {
    // Housing
    Rent => "RENT",
    PropertyTaxes => "PROPERTY_TAXES",
    HomeMaintenanceRepairs => "HOME_MAINTENANCE_REPAIRS",
    HomeInsurance => "HOME_INSURANCE",
    HouseholdSuppliesFurniture => "HOUSEHOLD_SUPPLIES_FURNITURE",
    // Transportation
    Fuel => "FUEL",
    PublicTransport => "PUBLIC_TRANSPORT",
    Uber => "UBER",
    CarMaintenance => "CAR_MAINTENANCE",
    Parking => "PARKING",
    VehicleInsurance => "VEHICLE_INSURANCE",
    Tolls => "TOLLS",
    // Shopping
    Shopping => "SHOPPING",
    Clothing => "CLOTHING",
    Electronics => "ELECTRONICS",
    Gifts => "GIFTS",
    BeautyCosmetics => "BEAUTY_COSMETICS",
    // Food & Dining
    Groceries => "GROCERIES",
    Restaurants => "RESTAURANTS",
    FastFood => "FAST_FOOD",
    CoffeeShops => "COFFEE_SHOPS",
    AlcoholBars => "ALCOHOL_BARS",
    FoodDrinks => "FOOD_DRINKS",
    // Entertainment
    Entertainment => "ENTERTAINMENT",
    Movies => "MOVIES",
    Events => "EVENTS",
    Games => "GAMES",
    Nightlife => "NIGHTLIFE",
    Hobbies => "HOBBIES",
    Gym => "GYM",
    // Technology & Services
    Tech => "TECH",
    SoftwareSubscriptions => "SOFTWARE_SUBSCRIPTIONS",
    InternetServices => "INTERNET_SERVICES",
    MobilePhonePlans => "MOBILE_PHONE_PLANS",
    Net => "NET",
    // Utilities
    Utilities => "UTILITIES",
    Water => "WATER",
    Electricity => "ELECTRICITY",
    Gas => "GAS",
    // Business
    OfficeSupplies => "OFFICE_SUPPLIES",
    BusinessTravel => "BUSINESS_TRAVEL",
    ProfessionalServices => "PROFESSIONAL_SERVICES",
    // Education
    Education => "EDUCATION",
    OnlineCourses => "ONLINE_COURSES",
    Classes => "CLASSES",
    // Insurance
    HealthInsurance => "HEALTH_INSURANCE",
    CarInsurance => "CAR_INSURANCE",
    LifeInsurance => "LIFE_INSURANCE",
    TravelInsurance => "TRAVEL_INSURANCE",
    // Health & Medical
    Health => "HEALTH",
    Pharmacy => "PHARMACY",
    Medical => "MEDICAL",
    Therapy => "THERAPY",
    // Pets
    PetFood => "PET_FOOD",
    VetVisits => "VET_VISITS",
    PetAccessories => "PET_ACCESSORIES",
    PetGrooming => "PET_GROOMING",
    // Banking & Investments
    BankFees => "BANK_FEES",
    Investments => "INVESTMENTS",
    // Streaming & Subscriptions
    StreamingServices => "STREAMING_SERVICES",
    VideoStreaming => "VIDEO_STREAMING",
    MusicStreaming => "MUSIC_STREAMING",
    CloudStorage => "CLOUD_STORAGE",
    DigitalMagazines => "DIGITAL_MAGAZINES",
    NewsSubscriptions => "NEWS_SUBSCRIPTIONS",
    // Travel
    Hotels => "HOTELS",
    Flights => "FLIGHTS",
    CarRental => "CAR_RENTAL",
    Tours => "TOURS",
    // Income
    Salary => "SALARY",
    Freelancing => "FREELANCING",
    InvestmentIncome => "INVESTMENT_INCOME",
    Refunds => "REFUNDS",
    RentalIncome => "RENTAL_INCOME",
    // Account-to-account moves, excluded from spending analytics
    Transfer => "TRANSFER",
    // General
    Other => "OTHER",
}

impl MovementCategory {
    /// Human-readable name: upper-snake split into title-cased words
    /// ("FOOD_DRINKS" becomes "Food Drinks").
    #[must_use]
    pub fn display_name(self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_string() + &chars.as_str().to_lowercase()
                })
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A settled or in-flight transaction against an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movement {
    /// Unique identifier.
    pub id: MovementId,
    /// The account this movement belongs to.
    pub account_id: AccountId,
    /// Category tag.
    pub category: MovementCategory,
    /// Income or expense.
    pub movement_type: MovementType,
    /// Positive amount.
    pub amount: Decimal,
    /// Free-text description.
    pub description: String,
    /// Booking date.
    pub date: NaiveDate,
    /// Lifecycle status.
    pub status: MovementStatus,
}

impl Movement {
    /// Signed balance effect: positive for income, negative for expense.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.movement_type {
            MovementType::Income => self.amount,
            MovementType::Expense => -self.amount,
        }
    }
}

/// Validates that a monetary amount is strictly positive.
pub(crate) fn validate_positive_amount(amount: &Decimal) -> Result<(), validator::ValidationError> {
    if *amount > Decimal::ZERO {
        Ok(())
    } else {
        Err(validator::ValidationError::new("amount_not_positive"))
    }
}

/// Payload for creating a movement.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMovementInput {
    /// Target account.
    pub account_id: AccountId,
    /// Category tag.
    pub category: MovementCategory,
    /// Income or expense.
    pub movement_type: MovementType,
    /// Positive amount.
    #[validate(custom(function = validate_positive_amount))]
    pub amount: Decimal,
    /// Free-text description.
    #[validate(length(min = 1, max = 255))]
    pub description: String,
    /// Booking date.
    pub date: NaiveDate,
    /// Lifecycle status at creation.
    pub status: MovementStatus,
}

/// Payload for updating a movement.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMovementInput {
    /// Target account (may differ from the current one).
    pub account_id: AccountId,
    /// Category tag.
    pub category: MovementCategory,
    /// Income or expense.
    pub movement_type: MovementType,
    /// Positive amount.
    #[validate(custom(function = validate_positive_amount))]
    pub amount: Decimal,
    /// Free-text description.
    #[validate(length(min = 1, max = 255))]
    pub description: String,
    /// Booking date.
    pub date: NaiveDate,
    /// New lifecycle status.
    pub status: MovementStatus,
}
