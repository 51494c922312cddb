// Copyright  (C) 2020, Kisio Digital and/or its affiliates. All rights reserved.
//
// This file is part of Navitia,
// the software to build cool stuff with public transport.
//
// Hope you'll enjoy and contribute to this project,
// powered by Kisio Digital (www.kisio.com).
// Help us simplify mobility and open public transport:
// a non ending quest to the responsive locomotion way of traveling!
//
// This contribution is a part of the research and development work of the
// IVA Project which aims to enhance traveler information and is carried out
// under the leadership of the Technological Research Institute SystemX,
// with the partnership and support of the transport organization authority
// Ile-De-France Mobilités (IDFM), SNCF, and public funds
// under the scope of the French Program "Investissements d’Avenir".
//
// LICENCE: This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.
//
// Stay tuned using
// twitter @navitia
// channel `#navitia` on riot https://riot.im/app/#/room/#navitia:matrix.org
// https://groups.google.com/d/forum/navitia
// www.navitia.io

#![allow(dead_code)]

use transit_catalogue::geo::Coordinates;
use transit_catalogue::tracing::dispatcher::DefaultGuard;
use transit_catalogue::{CatalogueError, TransportCatalogue};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[must_use]
pub fn init_test_logger() -> DefaultGuard {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .with(env_filter)
        .set_default()
}

pub fn coords(lat: f64, lng: f64) -> Coordinates {
    Coordinates { lat, lng }
}

/// The reference network: ten stops, twelve directed road distances and
/// three bus lines (roundtrips 256 and 828, one-way 750).
pub fn test_network() -> Result<TransportCatalogue, CatalogueError> {
    let mut catalogue = TransportCatalogue::new();

    catalogue.add_stop("Tolstopaltsevo", coords(55.611087, 37.208290));
    catalogue.add_stop("Marushkino", coords(55.595884, 37.209755));
    catalogue.add_stop("Rasskazovka", coords(55.632761, 37.333324));
    catalogue.add_stop("Biryulyovo Zapadnoye", coords(55.574371, 37.651700));
    catalogue.add_stop("Biryusinka", coords(55.581065, 37.648390));
    catalogue.add_stop("Universam", coords(55.587655, 37.645687));
    catalogue.add_stop("Biryulyovo Tovarnaya", coords(55.592028, 37.653656));
    catalogue.add_stop("Biryulyovo Passazhirskaya", coords(55.580999, 37.659164));
    catalogue.add_stop("Rossoshanskaya ulitsa", coords(55.595579, 37.605757));
    catalogue.add_stop("Prazhskaya", coords(55.611678, 37.603831));

    catalogue.add_distance("Tolstopaltsevo", "Marushkino", 3900)?;
    catalogue.add_distance("Marushkino", "Rasskazovka", 9900)?;
    catalogue.add_distance("Marushkino", "Marushkino", 100)?;
    catalogue.add_distance("Rasskazovka", "Marushkino", 9500)?;
    catalogue.add_distance("Biryulyovo Zapadnoye", "Rossoshanskaya ulitsa", 7500)?;
    catalogue.add_distance("Biryulyovo Zapadnoye", "Biryusinka", 1800)?;
    catalogue.add_distance("Biryulyovo Zapadnoye", "Universam", 2400)?;
    catalogue.add_distance("Biryusinka", "Universam", 750)?;
    catalogue.add_distance("Universam", "Rossoshanskaya ulitsa", 5600)?;
    catalogue.add_distance("Universam", "Biryulyovo Tovarnaya", 900)?;
    catalogue.add_distance("Biryulyovo Tovarnaya", "Biryulyovo Passazhirskaya", 1300)?;
    catalogue.add_distance("Biryulyovo Passazhirskaya", "Biryulyovo Zapadnoye", 1200)?;

    catalogue.add_bus(
        "256",
        &[
            "Biryulyovo Zapadnoye",
            "Biryusinka",
            "Universam",
            "Biryulyovo Tovarnaya",
            "Biryulyovo Passazhirskaya",
            "Biryulyovo Zapadnoye",
        ],
        true,
    )?;
    catalogue.add_bus(
        "750",
        &["Tolstopaltsevo", "Marushkino", "Marushkino", "Rasskazovka"],
        false,
    )?;
    catalogue.add_bus(
        "828",
        &[
            "Biryulyovo Zapadnoye",
            "Universam",
            "Rossoshanskaya ulitsa",
            "Biryulyovo Zapadnoye",
        ],
        true,
    )?;

    Ok(catalogue)
}
