pub mod dealer_review_parser;
pub mod employee_rating_parser;
pub mod markup;
pub mod next_link_parser;
pub mod positivity_scorer;

pub use dealer_review_parser::{DealerReviewParser, ReviewExtractor};
pub use employee_rating_parser::{EmployeeRatingExtractor, EmployeeRatingParser};
pub use next_link_parser::{NextLinkParser, NextLinkResolver};
pub use positivity_scorer::{PositivityScorer, SUPERLATIVES};
