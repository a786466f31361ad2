//! Catalog of LaTeX math commands recognized outside math delimiters
//!
//! Names are stored without the leading backslash. Order is irrelevant to
//! matching: the pattern built from this list sorts names longest-first.

pub const MATH_COMMANDS: &[&str] = &[
    // Environments
    "begin{aligned}",
    "end{aligned}",
    "begin{cases}",
    "end{cases}",
    "begin{matrix}",
    "end{matrix}",
    "begin{pmatrix}",
    "end{pmatrix}",
    "begin{bmatrix}",
    "end{bmatrix}",
    "begin{vmatrix}",
    "end{vmatrix}",
    // Braces and styles
    "overrightarrow",
    "overleftarrow",
    "overbrace",
    "underbrace",
    "displaystyle",
    "textstyle",
    "scriptstyle",
    "scriptscriptstyle",
    // Big operators and roots
    "frac",
    "sqrt",
    "sum",
    "prod",
    "int",
    "oint",
    "iint",
    "iiint",
    // Limits and named functions
    "lim",
    "sup",
    "inf",
    "max",
    "min",
    "arg",
    "sin",
    "cos",
    "tan",
    "cot",
    "sec",
    "csc",
    "arcsin",
    "arccos",
    "arctan",
    "sinh",
    "cosh",
    "tanh",
    "log",
    "ln",
    "lg",
    "exp",
    // Greek, lower case
    "alpha",
    "beta",
    "gamma",
    "delta",
    "epsilon",
    "varepsilon",
    "zeta",
    "eta",
    "theta",
    "vartheta",
    "iota",
    "kappa",
    "lambda",
    "mu",
    "nu",
    "xi",
    "pi",
    "varpi",
    "rho",
    "varrho",
    "sigma",
    "varsigma",
    "tau",
    "upsilon",
    "phi",
    "varphi",
    "chi",
    "psi",
    "omega",
    // Greek, upper case
    "Delta",
    "Gamma",
    "Lambda",
    "Omega",
    "Phi",
    "Pi",
    "Psi",
    "Sigma",
    "Theta",
    "Upsilon",
    "Xi",
    // Binary operators
    "times",
    "div",
    "pm",
    "mp",
    "cdot",
    "ast",
    "star",
    // Relations
    "leq",
    "geq",
    "neq",
    "approx",
    "equiv",
    "sim",
    "simeq",
    "cong",
    "propto",
    "parallel",
    "perp",
    // Sets
    "in",
    "notin",
    "subset",
    "supset",
    "subseteq",
    "supseteq",
    "cup",
    "cap",
    "emptyset",
    "varnothing",
    "setminus",
    // Arrows
    "rightarrow",
    "leftarrow",
    "Rightarrow",
    "Leftarrow",
    "leftrightarrow",
    "Leftrightarrow",
    "mapsto",
    // Logic
    "forall",
    "exists",
    "nexists",
    "therefore",
    "because",
    // Calculus
    "partial",
    "nabla",
    "infty",
    // Fonts
    "text",
    "mathrm",
    "mathbf",
    "mathit",
    "mathcal",
    "mathbb",
    "mathfrak",
    "mathsf",
    "mathtt",
    "boldsymbol",
    // Sizing
    "left",
    "right",
    "big",
    "Big",
    "bigg",
    "Bigg",
    "bigl",
    "bigr",
    "Bigl",
    "Bigr",
    "biggl",
    "biggr",
    // Accents
    "hat",
    "check",
    "breve",
    "acute",
    "grave",
    "tilde",
    "bar",
    "vec",
    "dot",
    "ddot",
    "dddot",
    "overline",
    "underline",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_no_duplicates() {
        let unique: HashSet<_> = MATH_COMMANDS.iter().collect();
        assert_eq!(unique.len(), MATH_COMMANDS.len());
    }

    #[test]
    fn test_names_have_no_backslash() {
        assert!(MATH_COMMANDS.iter().all(|name| !name.starts_with('\\')));
    }
}
