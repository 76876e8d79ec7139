// Generated by scripts/gen_tables.py. Do not edit by hand.

use super::{ClimateKey, ShowerheadKey};

pub(super) static WATER_HEATER_BASELINE_SAVINGS_RATES: &[(ClimateKey, &[(&str, f64)])] = &[
    (
        ("OR", "zonal", "all", "hz1"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 628.44748970032),
            ("tier2", 1018.04399222977),
            ("tier3", 1118.2073045809),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("OR", "zonal", "all", "hz2"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 646.724848558031),
            ("tier2", 1064.45723688258),
            ("tier3", 1166.44410023199),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("OR", "zonal", "all", "hz3"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 644.802713346239),
            ("tier2", 1137.75693274141),
            ("tier3", 1236.45741923206),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("OR", "central", "all", "hz1"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 1181.4812806366),
            ("tier2", 1571.07778316605),
            ("tier3", 1671.24109551718),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("OR", "central", "all", "hz2"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 1215.8427152891),
            ("tier2", 1633.57510361364),
            ("tier3", 1735.56196696305),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("OR", "central", "all", "hz3"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 1212.22910109093),
            ("tier2", 1705.1833204861),
            ("tier3", 1803.88380697675),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("WA", "zonal", "small", "hz1"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 1181.4812806366),
            ("tier2", 1571.07778316605),
            ("tier3", 1671.24109551718),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("WA", "zonal", "small", "hz2"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 1215.8427152891),
            ("tier2", 1633.57510361364),
            ("tier3", 1735.56196696305),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("WA", "zonal", "small", "hz3"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 1212.22910109093),
            ("tier2", 1705.1833204861),
            ("tier3", 1803.88380697675),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("WA", "zonal", "medium", "hz1"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 1181.4812806366),
            ("tier2", 1571.07778316605),
            ("tier3", 1671.24109551718),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("WA", "zonal", "medium", "hz2"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 1215.8427152891),
            ("tier2", 1633.57510361364),
            ("tier3", 1735.56196696305),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("WA", "zonal", "medium", "hz3"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 1212.22910109093),
            ("tier2", 1705.1833204861),
            ("tier3", 1803.88380697675),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("WA", "zonal", "large", "hz1"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 389.596502529453),
            ("tier3", 489.759814880583),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("WA", "zonal", "large", "hz2"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 417.732388324546),
            ("tier3", 519.719251673956),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("WA", "zonal", "large", "hz3"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 492.954219395174),
            ("tier3", 591.654705885819),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("WA", "central", "small", "hz1"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 1181.4812806366),
            ("tier2", 1571.07778316605),
            ("tier3", 1671.24109551718),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("WA", "central", "small", "hz2"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 1215.8427152891),
            ("tier2", 1633.57510361364),
            ("tier3", 1735.56196696305),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("WA", "central", "small", "hz3"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 1212.22910109093),
            ("tier2", 1705.1833204861),
            ("tier3", 1803.88380697675),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("WA", "central", "medium", "hz1"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 1181.4812806366),
            ("tier2", 1571.07778316605),
            ("tier3", 1671.24109551718),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("WA", "central", "medium", "hz2"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 1215.8427152891),
            ("tier2", 1633.57510361364),
            ("tier3", 1735.56196696305),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("WA", "central", "medium", "hz3"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 1212.22910109093),
            ("tier2", 1705.1833204861),
            ("tier3", 1803.88380697675),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("WA", "central", "large", "hz1"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 389.596502529453),
            ("tier3", 489.759814880583),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("WA", "central", "large", "hz2"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 417.732388324546),
            ("tier3", 519.719251673956),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("WA", "central", "large", "hz3"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 492.954219395174),
            ("tier3", 591.654705885819),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("ID", "zonal", "all", "hz1"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 1181.4812806366),
            ("tier2", 1571.07778316605),
            ("tier3", 1671.24109551718),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("ID", "zonal", "all", "hz2"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 1215.8427152891),
            ("tier2", 1633.57510361364),
            ("tier3", 1735.56196696305),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("ID", "zonal", "all", "hz3"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 1212.22910109093),
            ("tier2", 1705.1833204861),
            ("tier3", 1803.88380697675),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("MT", "zonal", "all", "hz1"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 1181.4812806366),
            ("tier2", 1571.07778316605),
            ("tier3", 1671.24109551718),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("MT", "zonal", "all", "hz2"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 1215.8427152891),
            ("tier2", 1633.57510361364),
            ("tier3", 1735.56196696305),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("MT", "zonal", "all", "hz3"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 1212.22910109093),
            ("tier2", 1705.1833204861),
            ("tier3", 1803.88380697675),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("ID", "central", "all", "hz1"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 1181.4812806366),
            ("tier2", 1571.07778316605),
            ("tier3", 1671.24109551718),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("ID", "central", "all", "hz2"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 1215.8427152891),
            ("tier2", 1633.57510361364),
            ("tier3", 1735.56196696305),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("ID", "central", "all", "hz3"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 1212.22910109093),
            ("tier2", 1705.1833204861),
            ("tier3", 1803.88380697675),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("MT", "central", "all", "hz1"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 1181.4812806366),
            ("tier2", 1571.07778316605),
            ("tier3", 1671.24109551718),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("MT", "central", "all", "hz2"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 1215.8427152891),
            ("tier2", 1633.57510361364),
            ("tier3", 1735.56196696305),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
    (
        ("MT", "central", "all", "hz3"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 1212.22910109093),
            ("tier2", 1705.1833204861),
            ("tier3", 1803.88380697675),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.3),
            ("gas_ef_gte_0p7", 31.5),
            ("gas_tankless_ef_gte_0p82", 62.0),
            ("gas_tankless_ef_gte_0p9", 71.0),
        ],
    ),
];

pub(super) static HEAT_PUMP_WATER_HEATER_BASELINE_CONSUMPTION_RATES: &[(ClimateKey, f64)] = &[
    (("OR", "zonal", "all", "hz1"), 2238.0),
    (("OR", "zonal", "all", "hz2"), 2340.0),
    (("OR", "zonal", "all", "hz3"), 2457.0),
    (("OR", "central", "all", "hz1"), 2791.0),
    (("OR", "central", "all", "hz2"), 2909.0),
    (("OR", "central", "all", "hz3"), 3024.0),
    (("WA", "zonal", "small", "hz1"), 2791.0),
    (("WA", "zonal", "small", "hz2"), 2909.0),
    (("WA", "zonal", "small", "hz3"), 3024.0),
    (("WA", "zonal", "medium", "hz1"), 2791.0),
    (("WA", "zonal", "medium", "hz2"), 2909.0),
    (("WA", "zonal", "medium", "hz3"), 3024.0),
    (("WA", "zonal", "large", "hz1"), 1609.0),
    (("WA", "zonal", "large", "hz2"), 1693.0),
    (("WA", "zonal", "large", "hz3"), 1812.0),
    (("WA", "central", "small", "hz1"), 2791.0),
    (("WA", "central", "small", "hz2"), 2909.0),
    (("WA", "central", "small", "hz3"), 3024.0),
    (("WA", "central", "medium", "hz1"), 2791.0),
    (("WA", "central", "medium", "hz2"), 2909.0),
    (("WA", "central", "medium", "hz3"), 3024.0),
    (("WA", "central", "large", "hz1"), 1609.0),
    (("WA", "central", "large", "hz2"), 1693.0),
    (("WA", "central", "large", "hz3"), 1812.0),
    (("ID", "zonal", "all", "hz1"), 2791.0),
    (("ID", "zonal", "all", "hz2"), 2909.0),
    (("ID", "zonal", "all", "hz3"), 3024.0),
    (("MT", "zonal", "all", "hz1"), 2791.0),
    (("MT", "zonal", "all", "hz2"), 2909.0),
    (("MT", "zonal", "all", "hz3"), 3024.0),
    (("ID", "central", "all", "hz1"), 2791.0),
    (("ID", "central", "all", "hz2"), 2909.0),
    (("ID", "central", "all", "hz3"), 3024.0),
    (("MT", "central", "all", "hz1"), 2791.0),
    (("MT", "central", "all", "hz2"), 2909.0),
    (("MT", "central", "all", "hz3"), 3024.0),
];

pub(super) static LOWFLOW_UEC: &[(ShowerheadKey, f64)] = &[
    (("OR", "electric", "zonal", "all", "electric resistance"), 679.777294870969),
    (("OR", "electric", "central", "all", "electric resistance"), 679.777294870969),
    (("OR", "gas", "central", "all", "electric resistance"), 679.777294870969),
    (("OR", "gas", "zonal", "all", "electric resistance"), 679.777294870969),
    (("WA", "electric", "zonal", "small", "electric resistance"), 580.331853759892),
    (("WA", "electric", "zonal", "medium", "electric resistance"), 610.165486093215),
    (("WA", "electric", "zonal", "large", "electric resistance"), 610.165486093215),
    (("WA", "electric", "central", "small", "electric resistance"), 580.331853759892),
    (("WA", "electric", "central", "medium", "electric resistance"), 620.110030204323),
    (("WA", "electric", "central", "large", "electric resistance"), 620.110030204323),
    (("WA", "gas", "central", "small", "electric resistance"), 580.331853759892),
    (("WA", "gas", "central", "medium", "electric resistance"), 620.110030204323),
    (("WA", "gas", "central", "large", "electric resistance"), 620.110030204323),
    (("WA", "gas", "zonal", "small", "electric resistance"), 580.331853759892),
    (("WA", "gas", "zonal", "medium", "electric resistance"), 610.165486093215),
    (("WA", "gas", "zonal", "large", "electric resistance"), 610.165486093215),
    (("ID", "electric", "zonal", "all", "electric resistance"), 679.777294870969),
    (("ID", "electric", "central", "all", "electric resistance"), 679.777294870969),
    (("ID", "gas", "central", "all", "electric resistance"), 679.777294870969),
    (("ID", "gas", "zonal", "all", "electric resistance"), 679.777294870969),
    (("MT", "electric", "zonal", "all", "electric resistance"), 679.777294870969),
    (("MT", "electric", "central", "all", "electric resistance"), 679.777294870969),
    (("MT", "gas", "central", "all", "electric resistance"), 679.777294870969),
    (("MT", "gas", "zonal", "all", "electric resistance"), 679.777294870969),
    (("OR", "electric", "zonal", "all", "hpwh"), 339.888647435484),
    (("OR", "electric", "central", "all", "hpwh"), 339.888647435484),
    (("OR", "gas", "central", "all", "hpwh"), 339.888647435484),
    (("OR", "gas", "zonal", "all", "hpwh"), 339.888647435484),
    (("WA", "electric", "zonal", "small", "hpwh"), 290.165926879946),
    (("WA", "electric", "zonal", "medium", "hpwh"), 305.082743046608),
    (("WA", "electric", "zonal", "large", "hpwh"), 305.082743046608),
    (("WA", "electric", "central", "small", "hpwh"), 290.165926879946),
    (("WA", "electric", "central", "medium", "hpwh"), 310.055015102161),
    (("WA", "electric", "central", "large", "hpwh"), 310.055015102161),
    (("WA", "gas", "central", "small", "hpwh"), 290.165926879946),
    (("WA", "gas", "central", "medium", "hpwh"), 310.055015102161),
    (("WA", "gas", "central", "large", "hpwh"), 310.055015102161),
    (("WA", "gas", "zonal", "small", "hpwh"), 290.165926879946),
    (("WA", "gas", "zonal", "medium", "hpwh"), 305.082743046608),
    (("WA", "gas", "zonal", "large", "hpwh"), 305.082743046608),
    (("ID", "electric", "zonal", "all", "hpwh"), 339.888647435484),
    (("ID", "electric", "central", "all", "hpwh"), 339.888647435484),
    (("ID", "gas", "central", "all", "hpwh"), 339.888647435484),
    (("ID", "gas", "zonal", "all", "hpwh"), 339.888647435484),
    (("MT", "electric", "zonal", "all", "hpwh"), 339.888647435484),
    (("MT", "electric", "central", "all", "hpwh"), 339.888647435484),
    (("MT", "gas", "central", "all", "hpwh"), 339.888647435484),
    (("MT", "gas", "zonal", "all", "hpwh"), 339.888647435484),
    (("OR", "electric", "zonal", "all", "gas"), 30.926618787791),
    (("OR", "electric", "central", "all", "gas"), 30.926618787791),
    (("OR", "gas", "central", "all", "gas"), 30.926618787791),
    (("OR", "gas", "zonal", "all", "gas"), 30.926618787791),
    (("WA", "electric", "zonal", "small", "gas"), 26.402326389926),
    (("WA", "electric", "zonal", "medium", "gas"), 27.759614109285),
    (("WA", "electric", "zonal", "large", "gas"), 27.759614109285),
    (("WA", "electric", "central", "small", "gas"), 26.402326389926),
    (("WA", "electric", "central", "medium", "gas"), 28.212043349072),
    (("WA", "electric", "central", "large", "gas"), 28.212043349072),
    (("WA", "gas", "central", "small", "gas"), 26.402326389926),
    (("WA", "gas", "central", "medium", "gas"), 28.212043349072),
    (("WA", "gas", "central", "large", "gas"), 28.212043349072),
    (("WA", "gas", "zonal", "small", "gas"), 26.402326389926),
    (("WA", "gas", "zonal", "medium", "gas"), 27.759614109285),
    (("WA", "gas", "zonal", "large", "gas"), 27.759614109285),
    (("ID", "electric", "zonal", "all", "gas"), 30.926618787791),
    (("ID", "electric", "central", "all", "gas"), 30.926618787791),
    (("ID", "gas", "central", "all", "gas"), 30.926618787791),
    (("ID", "gas", "zonal", "all", "gas"), 30.926618787791),
    (("MT", "electric", "zonal", "all", "gas"), 30.926618787791),
    (("MT", "electric", "central", "all", "gas"), 30.926618787791),
    (("MT", "gas", "central", "all", "gas"), 30.926618787791),
    (("MT", "gas", "zonal", "all", "gas"), 30.926618787791),
];
