// Integration tests for polygon rasterization:
//   invalid input, containment near edges, merging and configuration.

use geo::{coord, polygon, Coord};
use opengeotiling::{PolygonRasterizer, RasterOptions, Tile, TileArea, TileSize};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Vertices given as (latitude, longitude) pairs.
fn vertices(lat_lng: &[(f64, f64)]) -> Vec<Coord<f64>> {
    lat_lng.iter().map(|&(lat, lng)| coord! { x: lng, y: lat }).collect()
}

fn neighborhood(lat: f64, lng: f64) -> Tile {
    Tile::from_lat_lng(lat, lng, TileSize::Neighborhood).unwrap()
}

#[test]
fn missing_polygon_builds_nothing() {
    init_logger();
    let area = PolygonRasterizer::new()
        .set_precision(TileSize::Neighborhood)
        .build();
    assert!(area.is_none());
}

#[test]
fn two_valid_vertices_build_nothing() {
    init_logger();
    let rasterizer = PolygonRasterizer::new()
        .set_precision(TileSize::Neighborhood)
        .set_coordinates_list(vertices(&[(0.0, 0.0), (1.0, 1.0), (500.0, 500.0)]));
    assert!(!rasterizer.is_valid());
    assert!(rasterizer.build().is_none());
}

#[test]
fn square_contains_its_corners_and_center() {
    init_logger();
    let area = PolygonRasterizer::new()
        .set_precision(TileSize::District)
        .set_coordinates_list(vertices(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]))
        .build()
        .unwrap();

    for (lat, lng) in [(0.01, 0.01), (0.01, 0.95), (0.99, 0.95), (0.99, 0.01), (0.5, 0.5)] {
        assert!(area.contains(&neighborhood(lat, lng)), "({lat}, {lng})");
    }
    assert!(!area.contains(&neighborhood(1.5, 0.5)));
    assert!(!area.contains(&neighborhood(-0.01, 0.5)));
    assert!(!area.contains_lat_lng(0.5, 1.01));
}

#[test]
fn large_square_collapses_into_regions() {
    init_logger();
    let area = PolygonRasterizer::new()
        .set_precision(TileSize::District)
        .set_coordinates_list(vertices(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]))
        .build()
        .unwrap();

    assert_eq!(area.len(), 100);
    assert_eq!(area.tiles_for_precision(TileSize::Region).len(), 100);
    assert!(area.contains_lat_lng(9.99, 9.99));
    assert!(!area.contains_lat_lng(10.01, 5.0));
}

#[test]
fn slanted_edges() {
    init_logger();
    let area = PolygonRasterizer::new()
        .set_precision(TileSize::District)
        .set_coordinates_list(vertices(&[(0.25, 0.25), (0.25, 0.75), (0.75, 0.5)]))
        .build()
        .unwrap();

    assert!(area.contains(&neighborhood(0.5, 0.5)));
    assert!(!area.contains(&neighborhood(0.7, 0.3)));
    assert!(!area.tiles_for_precision(TileSize::District).is_empty());
}

#[test]
fn maximum_tile_size_limits_merging() {
    init_logger();
    let coords = vertices(&[(0.9, 0.9), (0.9, 2.1), (2.1, 2.1), (2.1, 0.9)]);
    let covering = |rasterizer: PolygonRasterizer| {
        rasterizer
            .set_precision(TileSize::District)
            .set_coordinates_list(coords.clone())
            .build()
            .unwrap()
            .covering_tiles()
            .len()
    };

    let global = covering(PolygonRasterizer::new());
    let region = covering(PolygonRasterizer::new().set_maximum_tile_size(TileSize::Region));
    let district = covering(PolygonRasterizer::new().set_maximum_tile_size(TileSize::District));

    // One complete region fits inside, no complete global tile does.
    assert_eq!(global, region);
    assert_eq!(region + 399, district);
    assert_eq!(district, 24 * 24);
}

#[test]
fn pinpoint_area_respects_neighborhood_cap() {
    init_logger();
    // Exactly four neighborhoods around (47.4725, -0.55).
    let area = PolygonRasterizer::new()
        .set_precision(TileSize::Pinpoint)
        .set_maximum_tile_size(TileSize::Neighborhood)
        .set_coordinates_list(vertices(&[
            (47.4725 + 0.0025, -0.55 - 0.0025),
            (47.4725 - 0.0025, -0.55 - 0.0025),
            (47.4725 - 0.0025, -0.55 + 0.0025),
            (47.4725 + 0.0025, -0.55 + 0.0025),
        ]))
        .build()
        .unwrap();

    assert_eq!(area.len(), 4);
    assert_eq!(area.tiles_for_precision(TileSize::Neighborhood).len(), 4);
    assert_eq!(area.smallest_tile_size(), TileSize::Pinpoint);
}

#[test]
fn options_from_json() {
    init_logger();
    let options: RasterOptions = serde_json::from_str(r#"{
        "precision": "district",
        "max_tile_size": "district"
    }"#).unwrap();

    let area = PolygonRasterizer::new()
        .with_options(options)
        .set_coordinates_list(vertices(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]))
        .build()
        .unwrap();
    assert_eq!(area.len(), 400);
    assert_eq!(area.max_tile_size(), TileSize::District);
}

#[test]
fn geo_polygon_input() {
    init_logger();
    let square = polygon![
        (x: 0.0, y: 0.0),
        (x: 1.0, y: 0.0),
        (x: 1.0, y: 1.0),
        (x: 0.0, y: 1.0),
    ];
    let area = PolygonRasterizer::new().set_polygon(&square).build().unwrap();
    assert_eq!(area.covering_tiles(), vec![Tile::from_address("6FG2").unwrap()]);
}
