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

pub mod logger;
pub mod requests;
pub mod responses;

use std::io;
use std::time::Instant;

use anyhow::{Context, Error};
use transit_catalogue::tracing::info;
use transit_catalogue::{MapRenderer, RequestHandler, TransportCatalogue, TransportRouter};

use requests::InputDocument;

/// Runs one full batch: parses the input document, ingests the base
/// requests, applies the settings and answers the stat requests. The
/// output document is written to `output`.
pub fn process(input: &str, output: &mut impl io::Write) -> Result<(), Error> {
    let document: InputDocument =
        serde_json::from_str(input).context("failed to parse the input document")?;

    let ingest_timer = Instant::now();
    let mut catalogue = TransportCatalogue::new();
    requests::populate_catalogue(&mut catalogue, &document.base_requests)
        .context("failed to ingest base requests")?;
    info!(
        "Catalogue populated in {} ms: {} stops, {} buses",
        ingest_timer.elapsed().as_millis(),
        catalogue.nb_of_stops(),
        catalogue.nb_of_buses()
    );

    let mut renderer = MapRenderer::new();
    if let Some(settings) = document.render_settings {
        renderer.set_render_settings(settings);
    }
    let mut router = TransportRouter::new();
    if let Some(settings) = document.routing_settings {
        router
            .set_routing_settings(settings)
            .context("invalid routing settings")?;
    }

    let mut handler = RequestHandler::new(&catalogue, &renderer, &mut router);
    let answers = responses::process_stat_requests(&mut handler, &document.stat_requests)
        .context("failed to answer stat requests")?;
    info!("Answered {} stat requests", answers.len());

    serde_json::to_writer_pretty(&mut *output, &answers)
        .context("failed to write the output document")?;
    writeln!(output)?;
    Ok(())
}
