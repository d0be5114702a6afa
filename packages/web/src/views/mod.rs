mod protected;
pub use protected::Protected;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod trails;
pub use trails::Trails;

mod trail_detail;
pub use trail_detail::TrailDetail;

mod profile;
pub use profile::Profile;

mod create_trail;
pub use create_trail::CreateTrail;

mod user_bookings;
pub use user_bookings::UserBookings;

mod admin;
pub use admin::Admin;

mod not_found;
pub use not_found::NotFound;
