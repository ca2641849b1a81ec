pub mod dealer_review;
pub mod employee_rating;

pub use dealer_review::DealerReview;
pub use employee_rating::EmployeeRating;
