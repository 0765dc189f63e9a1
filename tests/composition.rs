//! 두 상태의 몰분율 가중 조합 검증.
use iapws_thermo::{EquationOfState, IapwsThermo, RhoConst, Specie};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn liquid(n_moles: f64, hf: f64, sf: f64) -> IapwsThermo<RhoConst> {
    let specie = Specie::new("water", n_moles, 18.0153).expect("specie");
    IapwsThermo::new(RhoConst::new(specie, 1_000.0).expect("rho"), hf, sf)
}

#[test]
fn mixing_identical_states_is_idempotent() {
    for &(n1, n2) in &[(0.3, 0.7), (0.5, 0.5), (2.0, 11.0)] {
        let a = liquid(n1, -2.418e8, 1.888e5);
        let b = liquid(n2, -2.418e8, 1.888e5);
        let mix = a.clone() + b;
        assert_close("hf", mix.hf(), a.hf(), 1e-12);
        assert_close("sf", mix.sf(), a.sf(), 1e-12);
        assert_close("W", mix.molar_mass(), a.molar_mass(), 1e-12);
        assert_close("rho", mix.rho(1.0e5, 300.0), 1_000.0, 1e-12);
        assert_close("n", mix.n_moles(), n1 + n2, 1e-12);
        assert_close("ha", mix.ha(1.0e6, 400.0), a.ha(1.0e6, 400.0), 1e-12);
    }
}

#[test]
fn mixed_offsets_are_mole_fraction_weighted() {
    let (hf1, sf1) = (-2.0e8, 1.0e5);
    let (hf2, sf2) = (-1.0e8, 3.0e5);

    let mix = liquid(0.3, hf1, sf1) + liquid(0.7, hf2, sf2);
    assert_close("hf 0.3/0.7", mix.hf(), 0.3 * hf1 + 0.7 * hf2, 1e-12);
    assert_close("sf 0.3/0.7", mix.sf(), 0.3 * sf1 + 0.7 * sf2, 1e-12);

    let mix = liquid(0.5, hf1, sf1) + liquid(0.5, hf2, sf2);
    assert_close("hf 0.5/0.5", mix.hf(), 0.5 * hf1 + 0.5 * hf2, 1e-12);
    assert_close("sf 0.5/0.5", mix.sf(), 0.5 * sf1 + 0.5 * sf2, 1e-12);
}

#[test]
fn add_assign_matches_add() {
    let a = liquid(1.0, -2.0e8, 1.0e5);
    let b = liquid(3.0, -1.0e8, 2.0e5);
    let mut acc = a.clone();
    acc += b.clone();
    assert_eq!(acc, a + b);
}

#[test]
fn subtraction_removes_a_stream() {
    let a = liquid(4.0, -1.0e8, 2.0e5);
    let b = liquid(1.0, -1.0e8, 2.0e5);
    let rest = a.clone() - b.clone();
    assert_close("n", rest.n_moles(), 3.0, 1e-12);
    // (4/3)·hf - (1/3)·hf = hf
    assert_close("hf", rest.hf(), -1.0e8, 1e-12);

    let mut acc = a.clone();
    acc -= b.clone();
    assert_eq!(acc, a - b);
}

#[test]
fn residual_is_other_minus_self() {
    let a = liquid(1.0, -2.0e8, 1.0e5);
    let b = liquid(2.5, -1.5e8, 1.5e5);
    assert_eq!(a.residual(&b), b.clone() - a.clone());
    assert_close("n", a.residual(&b).n_moles(), 1.5, 1e-12);
}

#[test]
fn scaling_by_one_is_identity() {
    let a = liquid(2.0, -2.0e8, 1.0e5);
    assert_eq!(1.0 * a.clone(), a);
    assert_eq!(a.clone() * 1.0, a);
}

#[test]
fn scaling_changes_moles_only() {
    let a = liquid(2.0, -2.0e8, 1.0e5);
    let scaled = 4.0 * a.clone();
    assert_close("n", scaled.n_moles(), 8.0, 1e-12);
    assert_eq!(scaled.hf(), a.hf());
    assert_eq!(scaled.sf(), a.sf());
    assert_eq!(scaled.molar_mass(), a.molar_mass());

    let back = scaled * 0.25;
    assert_eq!(back.eos(), a.eos());

    let mut acc = a.clone();
    acc *= 3.0;
    acc *= 1.0 / 3.0;
    assert_close("n", acc.n_moles(), a.n_moles(), 1e-12);
}

#[test]
fn rename_keeps_properties() {
    let a = liquid(1.0, -2.0e8, 1.0e5).with_name("feedwater");
    assert_eq!(a.name(), "feedwater");
    assert_eq!(a.eos().name(), "feedwater");
    assert_eq!(a.hf(), -2.0e8);
}

#[test]
fn mixing_empty_streams_is_not_finite() {
    let a = liquid(0.0, -2.0e8, 1.0e5);
    let mix = a.clone() + a;
    assert!(!mix.hf().is_finite());
}

/// 복제할 수 없는 증기표로도 복합 대입 연산이 동작해야 한다.
struct FixedTable;

impl iapws_thermo::SteamTable for FixedTable {
    fn cp_pt(&self, _p: f64, _t: f64) -> f64 {
        4_180.0
    }

    fn h_pt(&self, _p: f64, _t: f64) -> f64 {
        4.18e5
    }

    fn s_pt(&self, _p: f64, _t: f64) -> f64 {
        1_300.0
    }
}

fn fixed(n_moles: f64, hf: f64, sf: f64) -> IapwsThermo<RhoConst, FixedTable> {
    let specie = Specie::new("water", n_moles, 18.0153).expect("specie");
    IapwsThermo::with_table(
        RhoConst::new(specie, 1_000.0).expect("rho"),
        hf,
        sf,
        iapws_thermo::Envelope::default(),
        FixedTable,
    )
}

#[test]
fn compound_assignment_needs_no_table_clone() {
    let mut acc = fixed(0.3, -2.0e8, 1.0e5);
    acc += fixed(0.7, -1.0e8, 3.0e5);
    assert_close("n", acc.n_moles(), 1.0, 1e-12);
    assert_close("hf", acc.hf(), 0.3 * -2.0e8 + 0.7 * -1.0e8, 1e-12);
    assert_close("sf", acc.sf(), 0.3 * 1.0e5 + 0.7 * 3.0e5, 1e-12);

    acc -= fixed(0.5, -1.0e8, 3.0e5);
    assert_close("n", acc.n_moles(), 0.5, 1e-12);
    // (1.0/0.5)·hf_mix - (0.5/0.5)·hf_b
    assert_close("hf", acc.hf(), 2.0 * (0.3 * -2.0e8 + 0.7 * -1.0e8) + 1.0e8, 1e-12);
}
