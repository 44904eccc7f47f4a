// Integration tests for the tile algebra:
//   construction paths, membership, adjacency and direction.

use std::f64::consts::PI;

use opengeotiling::pluscode::CodeError;
use opengeotiling::{PlusCode, Tile, TileError, TileSize};

fn tile(address: &str) -> Tile {
    Tile::from_address(address).unwrap()
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn all_construction_paths_agree() -> anyhow::Result<()> {
    let plus_code = "CCXWXWXW+XW";
    let code = PlusCode::new(plus_code)?;

    let a = Tile::new(code.clone(), TileSize::District)?;
    let b = Tile::from_plus_code(plus_code, TileSize::District)?;
    let c = Tile::from_plus_code(code.code(), TileSize::District)?;
    let d = Tile::from_address(a.address())?;
    let e = Tile::from_address(b.address())?;

    assert!(a.is_same_tile(&b));
    assert!(b.is_same_tile(&c));
    assert!(c.is_same_tile(&d));
    assert!(d.is_same_tile(&e));
    assert!(e.is_same_tile(&a));
    Ok(())
}

#[test]
fn addresses_per_size() -> anyhow::Result<()> {
    let code = PlusCode::new("CCXWXWXW+XW")?;
    let addresses = TileSize::ALL.into_iter()
        .map(|size| Ok(Tile::new(code.clone(), size)?.address().to_string()))
        .collect::<anyhow::Result<Vec<_>>>()?;
    assert_eq!(addresses, ["CC", "CCXW", "CCXWXW", "CCXWXWXW", "CCXWXWXWXW"]);
    Ok(())
}

#[test]
fn lowercase_input_is_normalised() {
    let upper = Tile::from_plus_code("8FVC9G8F+6X", TileSize::Neighborhood).unwrap();
    let lower = Tile::from_plus_code("8fvc9g8f+6x", TileSize::Neighborhood).unwrap();
    assert_eq!(upper, lower);
    assert_eq!(lower.address(), "8FVC9G8F");
}

#[test]
fn from_lat_lng_matches_encoded_code() {
    let tile = Tile::from_lat_lng(47.365590, 8.524997, TileSize::Pinpoint).unwrap();
    assert_eq!(tile.address(), "8FVC9G8F6X");
    assert_eq!(tile.wrapped_code().code(), "8FVC9G8F+6X");

    let district = Tile::from_lat_lng(47.365590, 8.524997, TileSize::District).unwrap();
    assert!(district.contains(&tile));
}

#[test]
fn tile_geocode_of_global_tile() {
    assert_eq!(tile("C9").tile_geocode().code(), "C9000000+");
}

#[test]
fn invalid_arguments_are_reported_by_kind() {
    assert!(matches!(Tile::from_address("8FV"), Err(TileError::UnsupportedAddressLength(3))));
    assert!(matches!(
        Tile::from_plus_code("8FVC0000+", TileSize::Pinpoint),
        Err(TileError::CodeTooCoarse { size: TileSize::Pinpoint, .. }),
    ));
    assert!(matches!(
        Tile::from_plus_code("9G8F+6X", TileSize::Global),
        Err(TileError::Code(CodeError::NotFull(_))),
    ));
    assert!(matches!(Tile::from_address("8FVB"), Err(TileError::Code(CodeError::InvalidCharacter('B')))));

    let mismatch = tile("8F").bearing(&tile("8FVC")).unwrap_err();
    assert_eq!(mismatch, TileError::SizeMismatch(TileSize::Global, TileSize::Region));
    assert_eq!(mismatch.to_string(), "tile sizes don't match: global vs region");
}

// ---------------------------------------------------------------------------
// Membership
// ---------------------------------------------------------------------------

#[test]
fn membership() {
    let big = tile("8CFF");
    let small = tile("8CFFXX");
    let tiny = tile("8CFFXXHH");

    assert!(big.contains(&small));
    assert!(big.contains(&tiny));
    assert!(small.contains(&tiny));
    assert!(big.contains(&big));
    assert!(!small.contains(&big));
}

#[test]
fn non_membership() {
    assert!(!tile("8CFFXX").contains(&tile("8CXXHHFF")));
}

// ---------------------------------------------------------------------------
// Adjacency
// ---------------------------------------------------------------------------

#[test]
fn same_size_adjacency() {
    let block = tile("8CRW2X");
    for address in ["8CRW3W", "8CRW3X", "8CRX32", "8CRX22", "8CQXX2", "8CQWXX", "8CQWXW", "8CRW2W"] {
        assert!(block.is_neighbor(&tile(address)), "{address}");
        assert!(tile(address).is_neighbor(&block), "{address}");
    }
    assert!(!block.is_neighbor(&tile("3FHP99")));
}

#[test]
fn neighbor_list_matches_adjacency() {
    let block = tile("8CRW2X");
    let mut neighbors: Vec<String> = block.neighbors().iter().map(|n| n.address().to_string()).collect();
    neighbors.sort();
    assert_eq!(neighbors, ["8CQWXW", "8CQWXX", "8CQXX2", "8CRW2W", "8CRW3W", "8CRW3X", "8CRX22", "8CRX32"]);
}

#[test]
fn adjacency_wraps_around_the_antimeridian() {
    assert!(tile("8V").is_neighbor(&tile("72")));
    assert!(tile("72").is_neighbor(&tile("8V")));
}

#[test]
fn adjacency_across_sizes() {
    let block = tile("8CRW2X");
    assert!(block.is_neighbor(&tile("8CRW2W8X")));
    assert!(block.is_neighbor(&tile("8CRX")));
    assert!(!block.is_neighbor(&tile("8CRW")));
}

#[test]
fn no_tile_is_its_own_neighbor() {
    let block = tile("8CRW2X");
    let polar = tile("CC");
    assert!(!block.is_neighbor(&block));
    assert!(!polar.is_neighbor(&polar));
    assert!(polar.neighbors().iter().all(|n| !n.is_same_tile(&polar)));
}

// ---------------------------------------------------------------------------
// Direction and distance
// ---------------------------------------------------------------------------

#[test]
fn directions() {
    let tile1 = tile("9F53");
    let tile2 = tile("8FX3"); // 4 rows south
    let tile3 = tile("9F5G"); // 9 columns east
    let tile4 = tile("8FX7"); // 4 rows south, 4 columns east
    let delta = 0.0001;

    let cases = [
        (&tile1, &tile2, PI / 2.0),
        (&tile2, &tile1, -PI / 2.0),
        (&tile1, &tile3, PI),
        (&tile3, &tile1, 0.0),
        (&tile1, &tile4, 0.75 * PI),
        (&tile4, &tile1, -0.25 * PI),
    ];
    for (from, to, expected) in cases {
        let bearing = from.bearing(to).unwrap();
        assert!((bearing - expected).abs() < delta, "{from} -> {to}: {bearing} != {expected}");
    }
}

#[test]
fn distances() {
    let tile1 = tile("9F53");
    let tile4 = tile("8FX7");
    assert_eq!(tile1.manhattan_distance(&tile4).unwrap(), 8);
    assert_eq!(tile1.chebyshev_distance(&tile4).unwrap(), 4);
    assert_eq!(tile1.manhattan_distance(&tile1).unwrap(), 0);

    // Diagonal step across the antimeridian.
    assert_eq!(tile("8V").manhattan_distance(&tile("72")).unwrap(), 2);
    assert_eq!(tile("8V").chebyshev_distance(&tile("72")).unwrap(), 1);
}
