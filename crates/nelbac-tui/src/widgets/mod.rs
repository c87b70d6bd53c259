mod about;
mod advisor;
mod cart_view;
mod nav_bar;
mod orbit;
mod products;
mod slideshow;
mod status_bar;

pub use about::AboutWidget;
pub use advisor::AdvisorWidget;
pub use cart_view::CartWidget;
pub use nav_bar::NavBarWidget;
pub use orbit::OrbitWidget;
pub use products::ProductsWidget;
pub use slideshow::SlideshowWidget;
pub use status_bar::StatusBarWidget;
