//! The fixed reference mansion.
//!
//! Seven rooms, three suspects. The layout and the clue wording are part of
//! the scenario's identity and must not drift: verdicts depend on which
//! rooms a route can reach.

use crate::map::{MansionMap, MapError, Side};

/// Builds the reference mansion. Elias is reachable three times down the
/// leftmost route; Bruno only through the bathroom; Diana through the
/// living room and the pantry.
pub fn reference_mansion() -> Result<MansionMap, MapError> {
    let mut map = MansionMap::new();

    let hall = map.add_clue_room(
        "Hall de Entrada",
        "A porta principal estava trancada por dentro.",
        Some("Elias"),
    );
    let sala_de_estar = map.add_clue_room(
        "Sala de Estar",
        "Um bilhete rasgado menciona 'encontro na despensa'.",
        Some("Diana"),
    );
    let cozinha = map.add_room("Cozinha");
    let quarto_principal = map.add_clue_room(
        "Quarto Principal",
        "O diário menciona um relógio de ouro.",
        Some("Elias"),
    );
    let banheiro = map.add_clue_room(
        "Banheiro",
        "Uma luva de seda vermelha foi encontrada próxima ao lavabo.",
        Some("Bruno"),
    );
    let despensa = map.add_clue_room(
        "Despensa",
        "Uma lanterna quebrada e marcas de pés enlameados.",
        Some("Diana"),
    );
    let varanda = map.add_clue_room(
        "Varanda",
        "O relógio de ouro estava caído no parapeito.",
        Some("Elias"),
    );

    map.attach(hall, Side::Left, sala_de_estar)?;
    map.attach(hall, Side::Right, cozinha)?;
    map.attach(sala_de_estar, Side::Left, quarto_principal)?;
    map.attach(sala_de_estar, Side::Right, banheiro)?;
    map.attach(cozinha, Side::Left, despensa)?;
    map.attach(quarto_principal, Side::Left, varanda)?;

    Ok(map)
}
