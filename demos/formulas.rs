//! Walk through each formula: set three knowns, solve, print the result.
//!
//! Run with: cargo run --example formulas

use std::sync::Arc;

use formulary::prelude::*;

fn print_values<V: Variable>(label: &str, formula: &Formula<V>) {
    println!("{label}");
    for entry in formula.entries() {
        match entry.value {
            Some(value) => println!("  {:<16} {value}", entry.name),
            None => println!("  {:<16} -", entry.name),
        }
    }
    println!();
}

fn main() -> FormulaResult<()> {
    let keyed = Arc::new(Solver::new(placeholder::keyed_table()?));
    let mut letters = Formula::new(keyed);
    letters
        .set(Letter::A, 23.33)
        .set(Letter::C, 1.23)
        .set(Letter::E, 0.847_55);
    let key = letters.calculate()?;
    print_values(&format!("keyed markers (key {key})"), &letters);

    let ordinal = Arc::new(Solver::new(placeholder::ordinal_table()?));
    let mut letters = Formula::new(ordinal);
    letters.set(Letter::B, 1.4).set(Letter::C, 1.0).set(Letter::D, 2.0);
    let key = letters.calculate()?;
    print_values(&format!("ordinal markers (key {key})"), &letters);

    let motion = Arc::new(Solver::new(kinematics::table()?));
    let mut car = Formula::new(Arc::clone(&motion));
    car.set(Kinematic::Acceleration, 1.3)
        .set(Kinematic::FinalVelocity, 8.7)
        .set(Kinematic::Time, 38.351);
    car.calculate()?;
    kinematics::verify(car.values(), 1e-9)?;
    print_values("kinematics", &car);
    let trip = Motion::from_set(car.values())?;
    println!("velocity change: {:?}\n", trip.velocity_change());

    // Same solver, new problem; the derived final velocity would be negative.
    car.reset();
    car.set(Kinematic::Distance, 0.0)
        .set(Kinematic::Time, 3.0)
        .set(Kinematic::InitialVelocity, 5.0);
    match car.calculate() {
        Ok(_) => print_values("kinematics (second problem)", &car),
        Err(e) => println!("second problem rejected: {e}\n"),
    }

    Ok(())
}
