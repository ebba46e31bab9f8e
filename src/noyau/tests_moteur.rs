//! Tests moteur : propriétés observables depuis l’hôte.
//!
//! Ajouts -> résultat, description, effacements, programme (aller-retour).

use super::Moteur;

fn moteur_depuis(entrees: &[&str]) -> Moteur {
    let mut m = Moteur::new();
    for e in entrees {
        match e.parse::<f64>() {
            Ok(v) => {
                m.push_operande(v);
            }
            Err(_) => {
                m.push_operateur(e);
            }
        }
    }
    m
}

/* ------------------------ Évaluation ------------------------ */

#[test]
fn une_seule_operande() {
    for v in [0.0, 1.0, -2.5, 1e300, f64::MIN_POSITIVE] {
        let mut m = Moteur::new();
        assert_eq!(m.push_operande(v), Some(v));
        assert_eq!(m.evaluer(), Some(v));
    }
}

#[test]
fn trois_plus_quatre() {
    let mut m = Moteur::new();
    m.push_operande(3.0);
    m.push_operande(4.0);
    assert_eq!(m.push_operateur("+"), Some(7.0));
    assert_eq!(m.description().as_deref(), Some("(3.0+4.0)"));
}

#[test]
fn huit_divise_par_deux() {
    let m = moteur_depuis(&["8", "2", "÷"]);
    assert_eq!(m.evaluer(), Some(4.0));
    assert_eq!(m.description().as_deref(), Some("(8.0÷2.0)"));
}

#[test]
fn soustraction_gauche_droite() {
    let m = moteur_depuis(&["10", "3", "−"]);
    assert_eq!(m.evaluer(), Some(7.0));
    assert_eq!(m.description().as_deref(), Some("(10.0−3.0)"));
}

#[test]
fn chaque_ajout_renvoie_le_nouveau_resultat() {
    let mut m = Moteur::new();
    assert_eq!(m.push_operande(2.0), Some(2.0));
    assert_eq!(m.push_operande(9.0), Some(9.0));
    assert_eq!(m.push_operateur("√"), Some(3.0));
    assert_eq!(m.push_operateur("×"), Some(6.0));
    assert_eq!(m.description().as_deref(), Some("(2.0×√(9.0))"));
}

#[test]
fn variable_non_liee_puis_liee() {
    let mut m = Moteur::new();
    assert_eq!(m.push_variable("M"), None);
    assert_eq!(m.description().as_deref(), Some("M"));

    m.variables_mut().insert("M".into(), 5.0);
    assert_eq!(m.evaluer(), Some(5.0));

    m.clear_variable("M");
    assert_eq!(m.evaluer(), None);
    // délier une variable absente : aucun effet
    m.clear_variable("M");
    m.clear_variable("inconnue");
}

#[test]
fn liaisons_fournies_par_l_hote() {
    let mut vars = super::Variables::new();
    vars.insert("x".into(), 2.0);
    let mut m = Moteur::avec_variables(vars);
    m.push_variable("x");
    m.push_operateur("π");
    assert_eq!(m.push_operateur("×"), Some(2.0 * std::f64::consts::PI));
    assert_eq!(m.description().as_deref(), Some("(x×π)"));
}

#[test]
fn symbole_inconnu_ignore() {
    let mut m = moteur_depuis(&["3", "4"]);
    assert_eq!(m.push_operateur("cos"), Some(4.0));
    assert_eq!(m.push_operateur("-"), Some(4.0));
    assert_eq!(m.jetons().len(), 2);
    assert_eq!(m.programme(), vec!["3.0", "4.0"]);
}

#[test]
fn effacer_tout() {
    let mut m = moteur_depuis(&["3", "4", "+"]);
    m.clear_all();
    assert!(m.est_vide());
    assert_eq!(m.evaluer(), None);
    assert_eq!(m.description(), None);
}

#[test]
fn racine_d_un_negatif_non_finie() {
    let mut m = Moteur::new();
    m.push_operande(-4.0);
    let r = m.push_operateur("√").expect("une valeur, pas une absence");
    assert!(!r.is_finite());
    assert_eq!(m.description().as_deref(), Some("√(-4.0)"));
}

#[test]
fn operateur_sans_operande_ne_modifie_pas_la_suite() {
    let mut m = Moteur::new();
    assert_eq!(m.push_operateur("√"), None);
    assert_eq!(m.description(), None);
    assert_eq!(m.programme(), vec!["√"]);

    let mut m = moteur_depuis(&["5"]);
    assert_eq!(m.push_operateur("×"), None);
    assert_eq!(m.programme(), vec!["5.0", "×"]);
    // une évaluation ratée ne consomme rien
    assert_eq!(m.evaluer(), None);
    assert_eq!(m.jetons().len(), 2);
}

/* ------------------------ Programme ------------------------ */

#[test]
fn programme_aller_retour_sans_variable() {
    let src = moteur_depuis(&["8", "2", "÷", "π", "sin", "+", "0.1", "−"]);
    let programme = src.programme();
    assert_eq!(programme, vec!["8.0", "2.0", "÷", "π", "sin", "+", "0.1", "−"]);

    let mut dst = Moteur::new();
    dst.set_programme(&programme);
    assert_eq!(dst.programme(), programme);
    assert_eq!(dst.evaluer(), src.evaluer());
    assert_eq!(dst.description(), src.description());
}

#[test]
fn programme_avec_variable_perd_la_variable() {
    let mut src = Moteur::new();
    src.set_variable("M", Some(3.0));
    src.push_variable("M");
    src.push_operande(2.0);
    src.push_operateur("×");
    assert_eq!(src.programme(), vec!["M", "2.0", "×"]);
    assert_eq!(src.evaluer(), Some(6.0));

    let mut dst = Moteur::new();
    dst.set_variable("M", Some(3.0));
    dst.set_programme(&src.programme());
    assert_eq!(dst.programme(), vec!["2.0", "×"]);
    assert_eq!(dst.evaluer(), None);
}

#[test]
fn import_remplace_toute_la_suite() {
    let mut m = moteur_depuis(&["1", "2", "3"]);
    m.set_programme(&["9", "inconnu"]);
    assert_eq!(m.programme(), vec!["9.0"]);
    assert_eq!(m.evaluer(), Some(9.0));

    m.set_programme::<&str>(&[]);
    assert!(m.est_vide());
}

/* ------------------------ Programmes profonds ------------------------ */

#[test]
fn somme_cumulee_de_cent_mille_operateurs() {
    const N: usize = 100_000;
    let mut programme = Vec::with_capacity(2 * N + 1);
    programme.push("1".to_string());
    for _ in 0..N {
        programme.push("1".to_string());
        programme.push("+".to_string());
    }

    let mut m = Moteur::new();
    m.set_programme(&programme);
    assert_eq!(m.jetons().len(), 2 * N + 1);
    assert_eq!(m.evaluer(), Some((N + 1) as f64));

    let d = m.description().expect("programme complet");
    assert!(d.starts_with("(((("));
    assert!(d.ends_with("+1.0)"));
    assert_eq!(d.matches('+').count(), N);

    // un ajout de plus reste correct
    assert_eq!(m.push_operande(2.0), Some(2.0));
    assert_eq!(m.push_operateur("×"), Some(2.0 * (N + 1) as f64));
}

#[test]
fn imbrication_unaire_profonde() {
    const N: usize = 100_000;
    let mut m = Moteur::new();
    let mut programme = vec!["0".to_string()];
    programme.extend(std::iter::repeat("sin".to_string()).take(N));
    m.set_programme(&programme);
    assert_eq!(m.evaluer(), Some(0.0));
    let d = m.description().expect("programme complet");
    assert_eq!(d.len(), N * "sin()".len() + "0.0".len());

    // opérande manquante sous 100k opérateurs : None, sans plantage
    programme[0] = "+".to_string();
    m.set_programme(&programme);
    assert_eq!(m.evaluer(), None);
    assert_eq!(m.description(), None);
}
