// Generated by scripts/gen_tables.py. Do not edit by hand.

use super::ClimateKey;

pub(super) static WATER_HEATER_BASELINE_SAVINGS_RATES: &[(ClimateKey, &[(&str, f64)])] = &[
    (
        ("OR", "zonal", "all", "hz1"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 749.955156585345),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("OR", "zonal", "all", "hz2"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 729.89270095061),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("OR", "zonal", "all", "hz3"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 691.60561874321),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("OR", "central", "all", "hz1"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 1409.91569438045),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("OR", "central", "all", "hz2"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 1372.19827778715),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("OR", "central", "all", "hz3"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 1300.21856323723),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("WA", "zonal", "small", "hz1"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 1409.91569438045),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("WA", "zonal", "small", "hz2"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 1372.19827778715),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("WA", "zonal", "small", "hz3"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 1300.21856323723),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("WA", "zonal", "medium", "hz1"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 1409.91569438045),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("WA", "zonal", "medium", "hz2"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 1372.19827778715),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("WA", "zonal", "medium", "hz3"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 1300.21856323723),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("WA", "zonal", "large", "hz1"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 0.0),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("WA", "zonal", "large", "hz2"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 0.0),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("WA", "zonal", "large", "hz3"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 0.0),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("WA", "central", "small", "hz1"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 1409.91569438045),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("WA", "central", "small", "hz2"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 1372.19827778715),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("WA", "central", "small", "hz3"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 1300.21856323723),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("WA", "central", "medium", "hz1"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 1409.91569438045),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("WA", "central", "medium", "hz2"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 1372.19827778715),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("WA", "central", "medium", "hz3"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 1300.21856323723),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("WA", "central", "large", "hz1"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 0.0),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("WA", "central", "large", "hz2"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 0.0),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("WA", "central", "large", "hz3"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 0.0),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("ID", "zonal", "all", "hz1"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 1409.91569438045),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("ID", "zonal", "all", "hz2"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 1372.19827778715),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("ID", "zonal", "all", "hz3"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 1300.21856323723),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("MT", "zonal", "all", "hz1"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 1409.91569438045),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("MT", "zonal", "all", "hz2"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 1372.19827778715),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("MT", "zonal", "all", "hz3"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 1300.21856323723),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("ID", "central", "all", "hz1"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 1409.91569438045),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("ID", "central", "all", "hz2"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 1372.19827778715),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("ID", "central", "all", "hz3"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 1300.21856323723),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("MT", "central", "all", "hz1"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 1409.91569438045),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("MT", "central", "all", "hz2"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 1372.19827778715),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
    (
        ("MT", "central", "all", "hz3"),
        &[
            ("electric resistance", 0.0),
            ("tier1", 0.0),
            ("tier2", 0.0),
            ("tier3", 1300.21856323723),
            ("gas_ef_lt_0p67", 0.0),
            ("gas_ef_gte_0p67", 25.180993218463),
            ("gas_ef_gte_0p7", 55.4482921986),
            ("gas_tankless_ef_gte_0p82", 46.07221762673),
            ("gas_tankless_ef_gte_0p9", 60.692241774182),
        ],
    ),
];
