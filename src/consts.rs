use std::time::Duration;

pub const CARD_NUMBER_DIGITS: usize = 16;
pub const CARD_NUMBER_GROUP: usize = 4;
/// 16 digits + 3 spaces
pub const CARD_NUMBER_FORMATTED_LEN: usize = 19;

pub const EXPIRY_DIGITS: usize = 4;
/// MM/YY
pub const EXPIRY_FORMATTED_LEN: usize = 5;

pub const CVV_DIGITS: usize = 3;
pub const HOLDER_NAME_MIN_LEN: usize = 3;

pub const SUCCESS_REDIRECT_DELAY: Duration = Duration::from_millis(2000);

pub const ORDER_ID_QUERY_PARAM: &str = "orderId";
pub const AMOUNT_QUERY_PARAM: &str = "amount";
pub const RETURN_URL_QUERY_PARAM: &str = "returnUrl";

pub const INVALID_LINK_MSG: &str = "Error: invalid order link";
pub const AMOUNT_NOT_SPECIFIED_MSG: &str = "Amount not specified";
pub const SUCCESS_HEADING_MSG: &str = "Payment completed successfully!";
pub const SUCCESS_SUBTITLE_MSG: &str = "Taking you back to the store...";
