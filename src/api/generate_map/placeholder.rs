// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Canned lash map returned until per-zone mapping is implemented

use crate::analysis::Language;

const MAP_PL: &str = "Przykładowa mapa rzęs (wersja demonstracyjna)\n\
\n\
Kącik wewnętrzny (0-20%): 8-9 mm, skręt C, delikatne przejście od linii wodnej.\n\
Strefa przejściowa (20-45%): 9-10 mm, skręt C, stopniowe wydłużanie.\n\
Strefa centralna (45-75%): 11-12 mm, skręt CC, najmocniejsze otwarcie oka.\n\
Kącik zewnętrzny (75-100%): 10-11 mm, skręt C, lekkie uniesienie bez opadania.\n\
\n\
Uwaga: to przykładowa mapa. Analiza zdjęcia nie jest jeszcze wykonywana.";

const MAP_EN: &str = "Sample lash map (demo version)\n\
\n\
Inner corner (0-20%): 8-9 mm, C curl, soft transition from the tear duct.\n\
Transition zone (20-45%): 9-10 mm, C curl, gradual lengthening.\n\
Central zone (45-75%): 11-12 mm, CC curl, strongest eye-opening effect.\n\
Outer corner (75-100%): 10-11 mm, C curl, gentle lift without drooping.\n\
\n\
Note: this is a sample map. The photo is not analysed yet.";

/// Placeholder map text selected solely by language
pub fn placeholder_map(language: Language) -> &'static str {
    match language {
        Language::Pl => MAP_PL,
        Language::En => MAP_EN,
    }
}
