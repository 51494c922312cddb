pub mod catalogue;
pub mod geo;
pub mod graph;
pub mod map_renderer;
pub mod model;
pub mod request_handler;
pub mod router;
pub mod svg;
pub mod transport_router;

pub use tracing;

pub use catalogue::{CatalogueError, TransportCatalogue};
pub use map_renderer::{MapRenderer, RenderError, RenderSettings, SphereProjector};
pub use model::{Bus, BusIdx, Stop, StopIdx};
pub use request_handler::{BusStat, RequestHandler};
pub use transport_router::{RouteInfo, RouteItem, RoutingError, RoutingSettings, TransportRouter};
