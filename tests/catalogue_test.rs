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

mod utils;

use anyhow::Error;
use rstest::rstest;
use transit_catalogue::{
    CatalogueError, MapRenderer, RequestHandler, TransportCatalogue, TransportRouter,
};
use utils::{coords, init_test_logger, test_network};

#[test]
fn roundtrip_bus_stats() -> Result<(), Error> {
    let _guard = init_test_logger();
    let catalogue = test_network()?;
    let renderer = MapRenderer::new();
    let mut router = TransportRouter::new();
    let handler = RequestHandler::new(&catalogue, &renderer, &mut router);

    let stat = handler.bus_stat("256").expect("bus 256 must exist");
    assert_eq!(stat.stop_count, 6);
    assert_eq!(stat.unique_stop_count, 5);
    assert_eq!(stat.route_length, 5950);
    assert!((stat.curvature - 1.36124).abs() < 1e-5);
    assert!(stat.curvature >= 1.0 - 1e-4);
    Ok(())
}

#[test]
fn one_way_bus_is_expanded() -> Result<(), Error> {
    let _guard = init_test_logger();
    let catalogue = test_network()?;
    let renderer = MapRenderer::new();
    let mut router = TransportRouter::new();
    let handler = RequestHandler::new(&catalogue, &renderer, &mut router);

    let stat = handler.bus_stat("750").expect("bus 750 must exist");
    assert_eq!(stat.stop_count, 7);
    assert_eq!(stat.unique_stop_count, 3);
    assert_eq!(stat.route_length, 27400);
    assert!((stat.curvature - 1.30853).abs() < 1e-5);
    Ok(())
}

#[test]
fn unknown_bus_has_no_stat() -> Result<(), Error> {
    let catalogue = test_network()?;
    let renderer = MapRenderer::new();
    let mut router = TransportRouter::new();
    let handler = RequestHandler::new(&catalogue, &renderer, &mut router);

    assert!(catalogue.find_bus("751").is_none());
    assert!(handler.bus_stat("751").is_none());
    Ok(())
}

#[test]
fn stop_membership_is_ordered_and_distinguishes_absence() -> Result<(), Error> {
    let catalogue = test_network()?;
    let renderer = MapRenderer::new();
    let mut router = TransportRouter::new();
    let handler = RequestHandler::new(&catalogue, &renderer, &mut router);

    let at_terminus: Vec<&str> = handler
        .buses_at_stop("Biryulyovo Zapadnoye")
        .expect("the stop must exist")
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(at_terminus, vec!["256", "828"]);

    let at_prazhskaya = handler
        .buses_at_stop("Prazhskaya")
        .expect("the stop exists even though no bus serves it");
    assert!(at_prazhskaya.is_empty());

    assert!(handler.buses_at_stop("Samara").is_none());
    Ok(())
}

#[rstest]
#[case("Marushkino", "Rasskazovka", 9900)]
#[case("Rasskazovka", "Marushkino", 9500)]
#[case("Marushkino", "Marushkino", 100)]
fn recorded_distances_are_directed(
    #[case] from: &str,
    #[case] to: &str,
    #[case] expected: u32,
) -> Result<(), Error> {
    let catalogue = test_network()?;
    let from = catalogue.find_stop(from).expect("known stop");
    let to = catalogue.find_stop(to).expect("known stop");
    assert_eq!(catalogue.get_distance(from, to), expected);
    Ok(())
}

#[test]
fn one_way_distance_falls_back_to_the_reverse_entry() -> Result<(), Error> {
    let mut catalogue = TransportCatalogue::new();
    catalogue.add_stop("Marushkino", coords(55.595884, 37.209755));
    catalogue.add_stop("Rasskazovka", coords(55.632761, 37.333324));
    catalogue.add_distance("Marushkino", "Rasskazovka", 9900)?;

    let marushkino = catalogue.find_stop("Marushkino").expect("known stop");
    let rasskazovka = catalogue.find_stop("Rasskazovka").expect("known stop");
    assert_eq!(catalogue.get_distance(marushkino, rasskazovka), 9900);
    assert_eq!(catalogue.get_distance(rasskazovka, marushkino), 9900);

    catalogue.add_distance("Rasskazovka", "Marushkino", 9500)?;
    assert_eq!(catalogue.get_distance(marushkino, rasskazovka), 9900);
    assert_eq!(catalogue.get_distance(rasskazovka, marushkino), 9500);
    Ok(())
}

#[test]
fn unrecorded_distance_is_zero_both_ways() -> Result<(), Error> {
    let catalogue = test_network()?;
    let prazhskaya = catalogue.find_stop("Prazhskaya").expect("known stop");
    let tolstopaltsevo = catalogue.find_stop("Tolstopaltsevo").expect("known stop");
    assert_eq!(catalogue.get_distance(prazhskaya, tolstopaltsevo), 0);
    assert_eq!(catalogue.get_distance(tolstopaltsevo, prazhskaya), 0);
    Ok(())
}

#[test]
fn unique_stop_count_never_exceeds_stop_count() -> Result<(), Error> {
    let catalogue = test_network()?;
    for bus_idx in catalogue.all_buses() {
        let bus = catalogue.bus(bus_idx);
        assert!(bus.unique_stop_count() <= bus.stop_count());
    }
    Ok(())
}

#[test]
fn a_bus_over_an_undeclared_stop_is_an_ingest_error() {
    let mut catalogue = TransportCatalogue::new();
    catalogue.add_stop("Tolstopaltsevo", coords(55.611087, 37.208290));

    let result = catalogue.add_bus("751", &["Tolstopaltsevo", "Samara"], false);
    assert_eq!(
        result.unwrap_err(),
        CatalogueError::UnknownStop {
            name: "Samara".to_string()
        }
    );

    let result = catalogue.add_distance("Tolstopaltsevo", "Samara", 1000);
    assert!(result.is_err());
}
