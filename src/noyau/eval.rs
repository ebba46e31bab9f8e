// src/noyau/eval.rs
//
// Évaluation postfixée, droite -> gauche, sur une tranche immuable.
// Pas de récursion native : un programme de 100k opérateurs ne doit pas
// faire sauter la pile d’appel.
//
// Deux passes :
// 1) curseur depuis la fin : on compte les opérandes encore attendues
//    pour trouver le début de la dernière expression complète
// 2) pile de valeurs (Vec, sur le tas) sur ce suffixe, de gauche à droite
//
// Contrats :
// - Jamais d’erreur : un échec (opérande manquante, variable non liée) = None.
// - Échec sous un opérateur : le reste renvoyé est la tranche d’ORIGINE.
// - Feuille seule (variable non liée au sommet) : le reste est la tranche sans elle.
// - Valeur non finie (√ d’un négatif, ÷ 0) = valeur, pas un échec.

use std::collections::HashMap;

use super::jetons::Jeton;

/// Liaisons de variables (nom -> valeur). Clé absente = pas de valeur.
pub type Variables = HashMap<String, f64>;

/// Début de la dernière expression complète de la tranche (None si incomplète).
pub(super) fn debut_expression(jetons: &[Jeton]) -> Option<usize> {
    // opérandes encore attendues
    let mut attendues: usize = 1;
    for (i, j) in jetons.iter().enumerate().rev() {
        match j {
            Jeton::Operande(_) | Jeton::Constante(..) | Jeton::Variable(_) => attendues -= 1,
            Jeton::OpUnaire(..) => {}
            Jeton::OpBinaire(..) => attendues += 1,
        }
        if attendues == 0 {
            return Some(i);
        }
    }
    None
}

/// Évalue la tranche et renvoie (résultat, reste non consommé).
pub fn evaluer<'a>(jetons: &'a [Jeton], variables: &Variables) -> (Option<f64>, &'a [Jeton]) {
    let Some((dernier, reste)) = jetons.split_last() else {
        return (None, jetons);
    };

    // feuille au sommet : le reste est consommé même sans valeur
    match dernier {
        Jeton::Operande(v) | Jeton::Constante(_, v) => return (Some(*v), reste),
        Jeton::Variable(nom) => return (variables.get(nom).copied(), reste),
        Jeton::OpUnaire(..) | Jeton::OpBinaire(..) => {}
    }

    let Some(debut) = debut_expression(jetons) else {
        return (None, jetons);
    };

    let mut pile: Vec<f64> = Vec::new();
    for j in &jetons[debut..] {
        let v = match j {
            Jeton::Operande(v) | Jeton::Constante(_, v) => *v,
            Jeton::Variable(nom) => match variables.get(nom) {
                Some(v) => *v,
                None => return (None, jetons),
            },
            Jeton::OpUnaire(_, f) => match pile.pop() {
                Some(x) => f(x),
                None => return (None, jetons),
            },
            Jeton::OpBinaire(_, f) => {
                // op1 = plus récente (dépilée en premier)
                let (Some(op1), Some(op2)) = (pile.pop(), pile.pop()) else {
                    return (None, jetons);
                };
                f(op1, op2)
            }
        };
        pile.push(v);
    }

    match (pile.pop(), pile.is_empty()) {
        (Some(r), true) => (Some(r), &jetons[..debut]),
        _ => (None, jetons),
    }
}
