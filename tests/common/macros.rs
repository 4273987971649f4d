/// Asserts that the living count matches the expected value.
#[macro_export]
macro_rules! assert_population {
    ($population:expr, $count:expr) => {
        assert_eq!(
            $population.counters().living,
            $count,
            "Population count mismatch"
        );
    };
}

/// Asserts that no plant with the given ID is in the live set.
#[macro_export]
macro_rules! assert_plant_gone {
    ($population:expr, $id:expr) => {
        let exists = $population.plants().iter().any(|p| p.id == $id);
        assert!(!exists, "Plant {} should be gone but is still alive", $id);
    };
}

/// Asserts that every live plant respects the height and energy bounds.
#[macro_export]
macro_rules! assert_plants_valid {
    ($population:expr) => {
        for plant in $population.plants() {
            assert!(plant.alive, "Dead plant {} left in the live set", plant.id);
            assert!(
                plant.height >= 0.0 && plant.height <= plant.traits.maximum_height,
                "Plant {} height {} outside [0, {}]",
                plant.id,
                plant.height,
                plant.traits.maximum_height
            );
            assert!(
                plant.energy >= 0.0,
                "Plant {} has negative energy {}",
                plant.id,
                plant.energy
            );
            assert!(
                $population.bounds().contains(plant.x(), plant.y()),
                "Plant {} at ({}, {}) outside the arena",
                plant.id,
                plant.x(),
                plant.y()
            );
        }
    };
}
