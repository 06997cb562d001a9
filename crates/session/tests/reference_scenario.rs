//! End-to-end behavior of a session on the 500 kt / 15 000 ft / 25 °C / Kr 0.9 case.

use approx::assert_relative_eq;
use machstep_session::{Action, Response, Session, run};
use machstep_thermo::Inputs;
use uom::si::{
    ratio::ratio, temperature_interval::kelvin as delta_kelvin, thermodynamic_temperature::kelvin,
};

#[test]
fn first_iteration_matches_hand_calculation() {
    let mut session = Session::default();
    let inputs = Inputs::default();

    let Response::Iterated(first) = session.handle(Action::Iterate, &inputs).unwrap() else {
        panic!("expected an iteration");
    };

    assert_eq!(first.count, 1);
    assert_relative_eq!(first.mach().get::<ratio>(), 0.7985, epsilon = 1e-4);
    assert_relative_eq!(
        first.calculated_total_temperature().get::<kelvin>(),
        288.09,
        epsilon = 1e-2
    );
    assert_relative_eq!(first.static_temperature().get::<kelvin>(), 263.39, epsilon = 1e-2);
    assert_relative_eq!(first.residual().get::<delta_kelvin>(), 9.906, epsilon = 1e-3);
    assert!(!first.converged);
}

#[test]
fn residuals_decrease_monotonically_until_converged() {
    let mut session = Session::default();
    let inputs = Inputs::default();

    let mut residuals = Vec::new();
    let summary = run::run(&mut session, &inputs, 50, |it: &machstep_session::Iteration| {
        residuals.push(it.residual().get::<delta_kelvin>());
        it.converged.then_some(run::Control::StopEarly)
    })
    .unwrap();

    assert!(summary.converged());
    assert_eq!(residuals.len(), 8);
    assert!(residuals.windows(2).all(|pair| pair[1] < pair[0]));
    assert!(*residuals.last().unwrap() < 0.1);

    let last = summary.last.unwrap();
    assert_relative_eq!(last.mach().get::<ratio>(), 0.7838, epsilon = 1e-4);
    assert_relative_eq!(last.static_temperature().get::<kelvin>(), 268.30, epsilon = 1e-2);
}

#[test]
fn separate_sessions_are_isolated() {
    let mut pilot = Session::default();
    let mut student = Session::default();
    let inputs = Inputs::default();

    for _ in 0..3 {
        pilot.iterate(&inputs).unwrap();
    }
    student.iterate(&inputs).unwrap();

    assert_eq!(pilot.state().unwrap().iteration_count(), 3);
    assert_eq!(student.state().unwrap().iteration_count(), 1);
}

#[test]
fn high_altitude_starts_from_stratosphere_temperature() {
    let mut session = Session::default();
    let inputs = Inputs {
        altitude_feet: 40_000.0,
        measured_total_temp_celsius: -20.0,
        ..Inputs::default()
    };

    let first = session.iterate(&inputs).unwrap();

    assert_relative_eq!(
        first.snapshot.input.static_temperature.get::<kelvin>(),
        216.65
    );
}
