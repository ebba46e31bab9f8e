// src/noyau/description.rs
//
// Description infixe, entièrement parenthésée, du programme postfixé.
// Même découpage que eval.rs (debut_expression), mais produit du texte :
// - feuille         -> son texte
// - unaire  sym(d)
// - binaire (d2 sym d1)   d1 = opérande la plus récente
//
// Pas de récursion native : noeuds indexés dans un Vec, puis écriture
// dans UNE seule String avec une pile de travail (linéaire en taille).
// La description ne lit pas les liaisons : une variable non liée se décrit.

use std::fmt::Write;

use super::eval::debut_expression;
use super::jetons::Jeton;

enum Noeud<'a> {
    Feuille(&'a Jeton),
    Unaire(&'static str, usize),
    // (symbole, d2, d1)
    Binaire(&'static str, usize, usize),
}

enum Travail {
    Noeud(usize),
    Texte(&'static str),
}

/// Décrit la tranche et renvoie (texte, reste non consommé).
pub fn decrire<'a>(jetons: &'a [Jeton]) -> (Option<String>, &'a [Jeton]) {
    let Some(debut) = debut_expression(jetons) else {
        return (None, jetons);
    };

    let mut noeuds: Vec<Noeud> = Vec::with_capacity(jetons.len() - debut);
    let mut pile: Vec<usize> = Vec::new();
    for j in &jetons[debut..] {
        let n = match j {
            Jeton::Operande(_) | Jeton::Constante(..) | Jeton::Variable(_) => Noeud::Feuille(j),
            Jeton::OpUnaire(symbole, _) => match pile.pop() {
                Some(d) => Noeud::Unaire(*symbole, d),
                None => return (None, jetons),
            },
            Jeton::OpBinaire(symbole, _) => {
                let (Some(d1), Some(d2)) = (pile.pop(), pile.pop()) else {
                    return (None, jetons);
                };
                Noeud::Binaire(*symbole, d2, d1)
            }
        };
        pile.push(noeuds.len());
        noeuds.push(n);
    }

    let racine = match (pile.pop(), pile.is_empty()) {
        (Some(r), true) => r,
        _ => return (None, jetons),
    };

    let mut out = String::new();
    let mut travail = vec![Travail::Noeud(racine)];
    while let Some(t) = travail.pop() {
        match t {
            Travail::Texte(s) => out.push_str(s),
            Travail::Noeud(i) => match &noeuds[i] {
                Noeud::Feuille(j) => {
                    let _ = write!(out, "{j}");
                }
                // ordre inverse : pile
                Noeud::Unaire(symbole, d) => travail.extend([
                    Travail::Texte(")"),
                    Travail::Noeud(*d),
                    Travail::Texte("("),
                    Travail::Texte(*symbole),
                ]),
                Noeud::Binaire(symbole, d2, d1) => travail.extend([
                    Travail::Texte(")"),
                    Travail::Noeud(*d1),
                    Travail::Texte(*symbole),
                    Travail::Noeud(*d2),
                    Travail::Texte("("),
                ]),
            },
        }
    }

    (Some(out), &jetons[..debut])
}
