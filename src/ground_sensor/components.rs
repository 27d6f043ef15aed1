use bevy::prelude::*;

#[derive(Component, Debug)]
#[component(storage = "SparseSet")]
pub struct Grounded;
