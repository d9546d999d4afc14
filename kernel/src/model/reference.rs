/// Reference-data lookups served by the backend for booking forms.

#[derive(Debug, Clone)]
pub struct RateCode {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct MarketCode {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct BookingChannel {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct PaymentMethod {
    pub code: String,
    pub name: String,
}
