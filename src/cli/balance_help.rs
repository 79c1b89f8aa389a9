pub const BALANCER_HELPER: &'static str = "
                                General considerations. \n
The program balances chemical equations: it finds the smallest positive integer coefficients that conserve every element \n
between reactants and products. All arithmetic is exact (rational numbers), so the answer is never a rounding artifact. \n

                                Writing formulas. \n
An element symbol is one capital letter followed by small letters, with an optional count after it, for example H2, Cl3, \n
Ca. Groups may be enclosed in round (), square [] or curly {} brackets with an optional multiplier after the closing \n
bracket, and nested to any depth, for example K4[ON(SO3)2]2. A closing bracket must be of the same kind as its opening \n
bracket, otherwise the formula is rejected. A leading integer multiplies the whole formula, so 2H2O means four H and two O. \n
Phase marks like (g) or (aq) are ignored and do no harm. \n

                                Writing equations. \n
Reactants and products are separated by '=' or by one of the arrows '->', '=>', '<-', '<->', all treated the same way. \n
Compounds on each side are separated by '+'. Exactly one separator must be present. Example: \n
        Ca(OH)2 + HCl = CaCl2 + H2O \n
If the equation cannot be balanced with the given compounds (for example, a product contains an element absent from the \n
reactants), the program reports that no solution exists instead of printing zeros. \n

                                Batch mode. \n
Option 2 of the menu reads equations from a document. The document must contain a line 'EQUATIONS' (or 'REACTIONS'); \n
every non-empty line after it, up to the next ALL-CAPS header or the end of the file, is one equation. Each equation is \n
balanced independently, a bad equation is reported and the rest of the batch continues. On request the results are \n
appended to the same document under a 'BALANCED EQUATIONS' header as a JSON array, which the program can read back. \n

                                Matrix view. \n
Option 3 prints the element conservation matrix of an equation: one row per element, one column per compound, product \n
columns negated. A coefficient vector x balances the equation exactly when A*x = 0. \n
";

pub fn print_balance_help() {
    println!("{}", BALANCER_HELPER);
}
