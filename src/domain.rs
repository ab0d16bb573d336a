mod testimonial;
mod unsubscribe_id;
mod user;
mod user_email;

pub use testimonial::Testimonial;
pub use unsubscribe_id::UnsubscribeId;
pub use user::User;
pub use user_email::UserEmail;
