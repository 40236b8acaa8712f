//! The static logo table: one ASCII-art asset per distribution, with
//! embedded ANSI color escapes. Pure data plus a keyed lookup.

use crate::platform::PlatformTag;

/// Lookup key for the logo table, derived from the raw distro match
/// rather than its display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoKey {
    Arch,
    Mint,
    Ubuntu,
    Debian,
    Gentoo,
    Fedora,
    MacOs,
    FreeBsd,
    OpenBsd,
    NetBsd,
    DragonFly,
    Cygwin,
    Linux,
}

/// Distro-name substrings (lowercased) mapped to logo keys, evaluated in
/// order; first match wins.
const DISTRO_PATTERNS: &[(&str, LogoKey)] = &[
    ("arch", LogoKey::Arch),
    ("manjaro", LogoKey::Arch),
    ("mint", LogoKey::Mint),
    ("lmde", LogoKey::Mint),
    ("ubuntu", LogoKey::Ubuntu),
    ("debian", LogoKey::Debian),
    ("gentoo", LogoKey::Gentoo),
    ("funtoo", LogoKey::Gentoo),
    ("fedora", LogoKey::Fedora),
];

/// Derive the logo key from the detected (or overridden) distro string
/// and the platform tag.
pub fn logo_key(distro: &str, tag: PlatformTag) -> LogoKey {
    match tag {
        PlatformTag::MacOs => return LogoKey::MacOs,
        PlatformTag::FreeBsd => return LogoKey::FreeBsd,
        PlatformTag::OpenBsd => return LogoKey::OpenBsd,
        PlatformTag::NetBsd => return LogoKey::NetBsd,
        PlatformTag::DragonFlyBsd => return LogoKey::DragonFly,
        PlatformTag::Cygwin => return LogoKey::Cygwin,
        _ => {}
    }

    let lower = distro.to_lowercase();
    DISTRO_PATTERNS
        .iter()
        .find(|(pattern, _)| lower.contains(pattern))
        .map(|(_, key)| *key)
        .unwrap_or(LogoKey::Linux)
}

/// Fetch the art for a key. `old_variant` selects the legacy art where
/// one exists (currently only Arch has one).
pub fn logo_for(key: LogoKey, old_variant: bool) -> &'static [&'static str] {
    match key {
        LogoKey::Arch if old_variant => OLD_ARCH,
        LogoKey::Arch => ARCH,
        LogoKey::Mint => MINT,
        LogoKey::Ubuntu => UBUNTU,
        LogoKey::Debian => DEBIAN,
        LogoKey::Gentoo => GENTOO,
        LogoKey::Fedora => FEDORA,
        LogoKey::MacOs => MACOS,
        LogoKey::FreeBsd => FREEBSD,
        LogoKey::OpenBsd => OPENBSD,
        LogoKey::NetBsd => NETBSD,
        LogoKey::DragonFly => DRAGONFLY,
        LogoKey::Cygwin => WINDOWS,
        LogoKey::Linux => LINUX,
    }
}

pub const OLD_ARCH: &[&str] = &[
    "\x1b[1;37m              __                     \x1b[0m",
    "\x1b[1;37m          _=(SDGJT=_                 \x1b[0m",
    "\x1b[1;37m        _GTDJHGGFCVS)                \x1b[0m",
    "\x1b[1;37m       ,GTDJGGDTDFBGX0               \x1b[0m",
    "\x1b[1;37m      JDJDIJHRORVFSBSVL\x1b[1;34m-=+=,_        \x1b[0m",
    "\x1b[1;37m     IJFDUFHJNXIXCDXDSV,\x1b[1;34m  \"DEBL      \x1b[0m",
    "\x1b[1;37m    [LKDSDJTDU=OUSCSBFLD.\x1b[1;34m   '?ZWX,   \x1b[0m",
    "\x1b[1;37m   ,LMDSDSWH'     `DCBOSI\x1b[1;34m     DRDS],\x1b[0m",
    "\x1b[1;37m   SDDFDFH'         !YEWD,\x1b[1;34m   )HDROD  \x1b[0m",
    "\x1b[1;37m  !KMDOCG            &GSU|\x1b[1;34m_GFHRGO' \x1b[0m",
    "\x1b[1;37m  HKLSGP'\x1b[1;34m           __\x1b[1;37mTKM0\x1b[1;34mGHRBV)'  \x1b[0m",
    "\x1b[1;37m JSNRVW'\x1b[1;34m       __+MNAEC\x1b[1;37mIOI,\x1b[1;34mBN'     \x1b[0m",
    "\x1b[1;37m HELK['\x1b[1;34m    __,=OFFXCBGHC\x1b[1;37mFD)         \x1b[0m",
    "\x1b[1;37m ?KGHE \x1b[1;34m_-#DASDFLSV='\x1b[1;37m    'EF         \x1b[0m",
    "\x1b[1;37m 'EHTI                    !H         \x1b[0m",
    "\x1b[1;37m  `0F'                    '!        \x1b[0m",
    "                                     \x1b[0m",
    "                                     \x1b[0m",
];

pub const ARCH: &[&str] = &[
    "\x1b[1;36m                   -`",
    "\x1b[1;36m                  .o+`                 \x1b[0m",
    "\x1b[1;36m                 `ooo/                \x1b[0m",
    "\x1b[1;36m                `+oooo:               \x1b[0m",
    "\x1b[1;36m               `+oooooo:              \x1b[0m",
    "\x1b[1;36m               -+oooooo+:             \x1b[0m",
    "\x1b[1;36m             `/:-:++oooo+:            \x1b[0m",
    "\x1b[1;36m            `/++++/+++++++:           \x1b[0m",
    "\x1b[1;36m           `/++++++++++++++:          \x1b[0m",
    "\x1b[1;36m          `/+++o\x1b[36moooooooo\x1b[1;36moooo/`        \x1b[0m",
    "\x1b[36m         \x1b[1;36m./\x1b[36mooosssso++osssssso\x1b[1;36m+`       \x1b[0m",
    "\x1b[36m        .oossssso-````/ossssss+`      \x1b[0m",
    "\x1b[36m       -osssssso.      :ssssssso.     \x1b[0m",
    "\x1b[36m      :osssssss/        osssso+++.    \x1b[0m",
    "\x1b[36m     /ossssssss/        +ssssooo/-    \x1b[0m",
    "\x1b[36m   `/ossssso+/:-        -:/+osssso+-  \x1b[0m",
    "\x1b[36m  `+sso+:-`                 `.-/+oso: \x1b[0m",
    "\x1b[36m `++:.                           `-/+/\x1b[0m",
    "\x1b[36m .`                                 `/\x1b[0m",
];

pub const MINT: &[&str] = &[
    "                                       \x1b[0m",
    "\x1b[1;32m MMMMMMMMMMMMMMMMMMMMMMMMMmds+.       \x1b[0m",
    "\x1b[1;32m MMm----::-://////////////oymNMd+`    \x1b[0m",
    "\x1b[1;32m MMd      \x1b[1;37m/++                \x1b[1;32m-sNMd:   \x1b[0m",
    "\x1b[1;32m MMNso/`  \x1b[1;37mdMM    `.::-. .-::.` \x1b[1;32m.hMN:  \x1b[0m",
    "\x1b[1;32m ddddMMh  \x1b[1;37mdMM   :hNMNMNhNMNMNh: \x1b[1;32m`NMm  \x1b[0m",
    "\x1b[1;32m     NMm  \x1b[1;37mdMM  .NMN/-+MMM+-/NMN` \x1b[1;32mdMM  \x1b[0m",
    "\x1b[1;32m     NMm  \x1b[1;37mdMM  -MMm  `MMM   dMM. \x1b[1;32mdMM  \x1b[0m",
    "\x1b[1;32m     NMm  \x1b[1;37mdMM  -MMm  `MMM   dMM. \x1b[1;32mdMM  \x1b[0m",
    "\x1b[1;32m     NMm  \x1b[1;37mdMM  .mmd  `mmm   yMM. \x1b[1;32mdMM  \x1b[0m",
    "\x1b[1;32m     NMm  \x1b[1;37mdMM`  ..`   ...   ydm. \x1b[1;32mdMM  \x1b[0m",
    "\x1b[1;32m     hMM- \x1b[1;37m+MMd/-------...-:sdds  \x1b[1;32mdMM  \x1b[0m",
    "\x1b[1;32m     -NMm- \x1b[1;37m:hNMNNNmdddddddddy/`  \x1b[1;32mdMM  \x1b[0m",
    "\x1b[1;32m      -dMNs-\x1b[1;37m``-::::-------.``    \x1b[1;32mdMM  \x1b[0m",
    "\x1b[1;32m       `/dMNmy+/:-------------:/yMMM  \x1b[0m",
    "\x1b[1;32m          ./ydNMMMMMMMMMMMMMMMMMMMMM  \x1b[0m",
    "\x1b[1;32m             .MMMMMMMMMMMMMMMMMMM    \x1b[0m",
    "                                      \x1b[0m",
];

pub const UBUNTU: &[&str] = &[
    "\x1b[1;31m                          ./+o+-       \x1b[0m",
    "\x1b[1;37m                  yyyyy- \x1b[1;31m-yyyyyy+     \x1b[0m",
    "\x1b[1;37m               \x1b[1;37m://+//////\x1b[1;31m-yyyyyyo     \x1b[0m",
    "\x1b[1;33m           .++ \x1b[1;37m.:/++++++/-\x1b[1;31m.+sss/`     \x1b[0m",
    "\x1b[1;33m         .:++o:  \x1b[1;37m/++++++++/:--:/-     \x1b[0m",
    "\x1b[1;33m        o:+o+:++.\x1b[1;37m`..```.-/oo+++++/    \x1b[0m",
    "\x1b[1;33m       .:+o:+o/.\x1b[1;37m          `+sssoo+/   \x1b[0m",
    "\x1b[1;37m  .++/+:\x1b[1;33m+oo+o:`\x1b[1;37m             /sssooo.  \x1b[0m",
    "\x1b[1;37m /+++//+:\x1b[1;33m`oo+o\x1b[1;37m               /::--:.  \x1b[0m",
    "\x1b[1;37m +/+o+++\x1b[1;33m`o++o\x1b[1;31m               ++////.   \x1b[0m",
    "\x1b[1;37m  .++.o+\x1b[1;33m++oo+:`\x1b[1;31m             /dddhhh.  \x1b[0m",
    "\x1b[1;33m       .+.o+oo:.\x1b[1;31m          `oddhhhh+   \x1b[0m",
    "\x1b[1;33m        +.++o+o``-``\x1b[1;31m``.:ohdhhhhh+     \x1b[0m",
    "\x1b[1;33m         `:o+++ \x1b[1;31m`ohhhhhhhhyo++os:     \x1b[0m",
    "\x1b[1;33m           .o:\x1b[1;31m`.syhhhhhhh/\x1b[1;33m.oo++o`     \x1b[0m",
    "\x1b[1;31m               /osyyyyyyo\x1b[1;33m++ooo+++/    \x1b[0m",
    "\x1b[1;31m                   ````` \x1b[1;33m+oo+++o:    \x1b[0m",
    "\x1b[1;33m                          `oo++.      \x1b[0m",
];

pub const DEBIAN: &[&str] = &[
    "  \x1b[1;37m       _,met$$$$$gg.           \x1b[0m",
    "  \x1b[1;37m    ,g$$$$$$$$$$$$$$$P.       \x1b[0m",
    "  \x1b[1;37m  ,g$$P\"\"       \"\"\"Y$$.\".     \x1b[0m",
    "  \x1b[1;37m ,$$P'              `$$$.     \x1b[0m",
    "  \x1b[1;37m',$$P       ,ggs.     `$$b:   \x1b[0m",
    "  \x1b[1;37m`d$$'     ,$P\"'   \x1b[1;31m.\x1b[1;37m    $$$    \x1b[0m",
    "  \x1b[1;37m $$P      d$'     \x1b[1;31m,\x1b[1;37m    $$P    \x1b[0m",
    "  \x1b[1;37m $$:      $$.   \x1b[1;31m-\x1b[1;37m    ,d$$'    \x1b[0m",
    "  \x1b[1;37m $$;      Y$b._   _,d$P'     \x1b[0m",
    "  \x1b[1;37m Y$$.    \x1b[1;31m`.\x1b[1;37m`\"Y$$$$P\"'         \x1b[0m",
    "  \x1b[1;37m `$$b      \x1b[1;31m\"-.__              \x1b[0m",
    "  \x1b[1;37m  `Y$$                        \x1b[0m",
    "  \x1b[1;37m   `Y$$.                      \x1b[0m",
    "  \x1b[1;37m     `$$b.                    \x1b[0m",
    "  \x1b[1;37m       `Y$$b.                 \x1b[0m",
    "  \x1b[1;37m          `\"Y$b._             \x1b[0m",
    "  \x1b[1;37m              `\"\"\"\"           \x1b[0m",
    "                                \x1b[0m",
];

pub const GENTOO: &[&str] = &[
    "\x1b[1;35m         -/oyddmdhs+:.                \x1b[0m",
    "\x1b[1;35m     -o\x1b[1;37mdNMMMMMMMMNNmhy+\x1b[1;35m-`            \x1b[0m",
    "\x1b[1;35m   -y\x1b[1;37mNMMMMMMMMMMMNNNmmdhy\x1b[1;35m+-          \x1b[0m",
    "\x1b[1;35m `o\x1b[1;37mmMMMMMMMMMMMMNmdmmmmddhhy\x1b[1;35m/`       \x1b[0m",
    "\x1b[1;35m om\x1b[1;37mMMMMMMMMMMMN\x1b[1;35mhhyyyo\x1b[1;37mhmdddhhhd\x1b[1;35mo`     \x1b[0m",
    "\x1b[1;35m.y\x1b[1;37mdMMMMMMMMMMd\x1b[1;35mhs++so/s\x1b[1;37mmdddhhhhdm\x1b[1;35m+`   \x1b[0m",
    "\x1b[1;35m oy\x1b[1;37mhdmNMMMMMMMN\x1b[1;35mdyooy\x1b[1;37mdmddddhhhhyhN\x1b[1;35md.  \x1b[0m",
    "\x1b[1;35m  :o\x1b[1;37myhhdNNMMMMMMMNNNmmdddhhhhhyym\x1b[1;35mMh  \x1b[0m",
    "\x1b[1;35m    .:\x1b[1;37m+sydNMMMMMNNNmmmdddhhhhhhmM\x1b[1;35mmy  \x1b[0m",
    "\x1b[1;35m       /m\x1b[1;37mMMMMMMNNNmmmdddhhhhhmMNh\x1b[1;35ms:  \x1b[0m",
    "\x1b[1;35m   `o\x1b[1;37mNMMMMMMMNNNmmmddddhhdmMNhs\x1b[1;35m+`   \x1b[0m",
    "\x1b[1;35m  `s\x1b[1;37mNMMMMMMMMNNNmmmdddddmNMmhs\x1b[1;35m/.     \x1b[0m",
    "\x1b[1;35m /N\x1b[1;37mMMMMMMMMNNNNmmmdddmNMNdso\x1b[1;35m:`       \x1b[0m",
    "\x1b[1;35m+M\x1b[1;37mMMMMMMNNNNNmmmmdmNMNdso\x1b[1;35m/-          \x1b[0m",
    "\x1b[1;35myM\x1b[1;37mMNNNNNNNmmmmmNNMmhs+/\x1b[1;35m-`              \x1b[0m",
    "\x1b[1;35m/h\x1b[1;37mMMNNNNNNNNMNdhs++/\x1b[1;35m-`               \x1b[0m",
    "\x1b[1;35m`/\x1b[1;37mohdmmddhys+++/:\x1b[1;35m.`                  \x1b[0m",
    "\x1b[1;35m  `-//////:--.                       \x1b[0m",
];

pub const FEDORA: &[&str] = &[
    "\x1b[1;34m           :/------------://          \x1b[0m",
    "\x1b[1;34m        :------------------://       \x1b[0m",
    "\x1b[1;34m      :-----------\x1b[1;37m/shhdhyo/\x1b[1;34m-://      \x1b[0m",
    "\x1b[1;34m    /-----------\x1b[1;37momMMMNNNMMMd/\x1b[1;34m-:/     \x1b[0m",
    "\x1b[1;34m   :-----------\x1b[1;37msMMMdo:/\x1b[1;34m       -:/    \x1b[0m",
    "\x1b[1;34m  :-----------\x1b[1;37m:MMMd\x1b[1;34m-------    --:/   \x1b[0m",
    "\x1b[1;34m  /-----------\x1b[1;37m:MMMy\x1b[1;34m-------    ---/   \x1b[0m",
    "\x1b[1;34m :------    --\x1b[1;37m/+MMMh/\x1b[1;34m--        ---:  \x1b[0m",
    "\x1b[1;34m :---     \x1b[1;37moNMMMMMMMMMNho\x1b[1;34m     -----:  \x1b[0m",
    "\x1b[1;34m :--      \x1b[1;37m+shhhMMMmhhy++\x1b[1;34m   ------:   \x1b[0m",
    "\x1b[1;34m :-      -----\x1b[1;37m:MMMy\x1b[1;34m--------------/   \x1b[0m",
    "\x1b[1;34m :-     ------\x1b[1;37m/MMMy\x1b[1;34m-------------:    \x1b[0m",
    "\x1b[1;34m :-      ----\x1b[1;37m/hMMM+\x1b[1;34m------------:     \x1b[0m",
    "\x1b[1;34m :--\x1b[1;37m:dMMNdhhdNMMNo\x1b[1;34m-----------:       \x1b[0m",
    "\x1b[1;34m :---\x1b[1;37m:sdNMMMMNds:\x1b[1;34m----------:         \x1b[0m",
    "\x1b[1;34m :------\x1b[1;37m:://:\x1b[1;34m-----------://          \x1b[0m",
    "\x1b[1;34m :--------------------://            \x1b[0m",
    "                                     \x1b[0m",
];

pub const FREEBSD: &[&str] = &[
    "                                      \x1b[0m",
    "   \x1b[1;37m```                        \x1b[1;31m`      \x1b[0m",
    "  \x1b[1;37m` `.....---...\x1b[1;31m....--.```   -/      \x1b[0m",
    "  \x1b[1;37m+o   .--`         \x1b[1;31m/y:`      +.     \x1b[0m",
    "  \x1b[1;37m yo`:.            \x1b[1;31m:o      `+-      \x1b[0m",
    "    \x1b[1;37my/               \x1b[1;31m-/`   -o/       \x1b[0m",
    "   \x1b[1;37m.-                  \x1b[1;31m::/sy+:.      \x1b[0m",
    "   \x1b[1;37m/                     \x1b[1;31m`--  /      \x1b[0m",
    "  \x1b[1;37m`:                          \x1b[1;31m:`     \x1b[0m",
    "  \x1b[1;37m`:                          \x1b[1;31m:`     \x1b[0m",
    "   \x1b[1;37m/                          \x1b[1;31m/      \x1b[0m",
    "   \x1b[1;37m.-                        \x1b[1;31m-.      \x1b[0m",
    "    \x1b[1;37m--                      \x1b[1;31m-.       \x1b[0m",
    "     \x1b[1;37m`:`                  \x1b[1;31m`:`        \x1b[0m",
    "       \x1b[1;31m.--             `--.          \x1b[0m",
    "         \x1b[1;31m .---.....----.             \x1b[0m",
    "                                     \x1b[0m",
    "                                     \x1b[0m",
];

pub const OPENBSD: &[&str] = &[
    "                                       \x1b[1;36m _      \x1b[0m",
    "                                       \x1b[1;36m(_)      \x1b[0m",
    "\x1b[1;33m              |    .                            \x1b[0m",
    "\x1b[1;33m          .   |L  /|   .         \x1b[1;36m _      \x1b[0m",
    "\x1b[1;33m      _ . |\\ _| \\--+._/| .       \x1b[1;36m(_)    \x1b[0m",
    "\x1b[1;33m     / ||\\| Y J  )   / |/| ./           \x1b[0m",
    "\x1b[1;33m    J  |)'( |        \\` F\\`.'/       \x1b[1;36m _   \x1b[0m",
    "\x1b[1;33m  -<|  F         __     .-<        \x1b[1;36m(_)  \x1b[0m",
    "\x1b[1;33m    | /       .-'\x1b[1;36m. \x1b[1;33m\\`.  /\x1b[1;36m-. \x1b[1;33mL___         \x1b[0m",
    "\x1b[1;33m    J \\      <    \x1b[1;36m\\ \x1b[1;33m | | \x1b[1;30mO\x1b[1;36m\\\\\x1b[1;33m|.-' \x1b[1;36m _      \x1b[0m",
    "\x1b[1;33m  _J \\  .-    \\\\\x1b[1;36m/ \x1b[1;30mO \x1b[1;36m| \x1b[1;33m| \\  |\x1b[1;33mF    \x1b[1;36m(_)     \x1b[0m",
    "\x1b[1;33m '-F  -<_.     \\   .-'  \\`-' L__         \x1b[0m",
    "\x1b[1;33m__J  _   _.     >-'  \x1b[33m)\x1b[1;31m._.   \x1b[1;33m|-'         \x1b[0m",
    "\x1b[1;33m \\`-|.'   /_.          \x1b[1;31m\\_|  \x1b[1;33m F           \x1b[0m",
    "\x1b[1;33m  /.-   .                _.<            \x1b[0m",
    "\x1b[1;33m /'    /.'             .'  \\`\\           \x1b[0m",
    "\x1b[1;33m  /L  /'   |/      _.-'-\\               \x1b[0m",
    "\x1b[1;33m /'J       ___.---'\\|                   \x1b[0m",
    "\x1b[1;33m   |\\  .--' V  | \\`. \\`                   \x1b[0m",
    "\x1b[1;33m   |/\\`. \\`-.     \\`._)                    \x1b[0m",
    "\x1b[1;33m      / .-.\\                            \x1b[0m",
    "\x1b[1;33m      \\ (  \\`\\                           \x1b[0m",
    "\x1b[1;33m       \\`.\\                                  \x1b[0m",
];

pub const DRAGONFLY: &[&str] = &[
    "                     \x1b[1;31m |                     \x1b[0m",
    "                    \x1b[1;31m .-.                   \x1b[0m",
    "                   \x1b[1;33m ()\x1b[1;31mI\x1b[1;33m()                  \x1b[0m",
    "              \x1b[1;31m \"==.__:-:__.==\"             \x1b[0m",
    "              \x1b[1;31m\"==.__/~|~\\__.==\"            \x1b[0m",
    "              \x1b[1;31m\"==._(  Y  )_.==\"            \x1b[0m",
    "   \x1b[1;37m.-'~~\"\"~=--...,__\x1b[1;31m\\/|\\/\x1b[1;37m__,...--=~\"\"~~'-. \x1b[0m",
    "  \x1b[1;37m(               ..=\x1b[1;31m\\\\=\x1b[1;31m/\x1b[1;37m=..               )\x1b[0m",
    "   \x1b[1;37m\\`'-.        ,.-\"\\`;\x1b[1;31m/=\\\\\x1b[1;37m ;\"-.,_        .-'\\`\x1b[0m",
    "      \x1b[1;37m \\`~\"-=-~\\` .-~\\` \x1b[1;31m|=|\x1b[1;37m \\`~-. \\`~-=-\"~\\`     \x1b[0m",
    "       \x1b[1;37m     .-~\\`    /\x1b[1;31m|=|\x1b[1;37m\\    \\`~-.          \x1b[0m",
    "       \x1b[1;37m  .~\\`       / \x1b[1;31m|=|\x1b[1;37m \\       \\`~.       \x1b[0m",
    " \x1b[1;37m    .-~\\`        .'  \x1b[1;31m|=|\x1b[1;37m  \\\\\\`.        \\`~-.  \x1b[0m",
    " \x1b[1;37m  (\\`     _,.-=\"\\`  \x1b[1;31m  |=|\x1b[1;37m    \\`\"=-.,_     \\`) \x1b[0m",
    " \x1b[1;37m   \\`~\"~\"\\`        \x1b[1;31m   |=|\x1b[1;37m           \\`\"~\"~\\`  \x1b[0m",
    "                   \x1b[1;31m  /=\\                   \x1b[0m",
    "                   \x1b[1;31m  \\=/                   \x1b[0m",
    "                   \x1b[1;31m   ^                    \x1b[0m",
];

pub const NETBSD: &[&str] = &[
    "                                  \x1b[1;31m__,gnnnOCCCCCOObaau,_      \x1b[0m",
    "   \x1b[1;37m_._                    \x1b[1;31m__,gnnCCCCCCCCOPF\"''              \x1b[0m",
    "  \x1b[1;37m(N\\\\\\\\\x1b[1;31mXCbngg,._____.,gnnndCCCCCCCCCCCCF\"___,,,,___          \x1b[0m",
    "   \x1b[1;37m\\\\N\\\\\\\\\x1b[1;31mXCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCOOOOPYvv.     \x1b[0m",
    "    \x1b[1;37m\\\\N\\\\\\\\\x1b[1;31mXCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCPF\"''               \x1b[0m",
    "     \x1b[1;37m\\\\N\\\\\\\\\x1b[1;31mXCCCCCCCCCCCCCCCCCCCCCCCCCOF\"'                     \x1b[0m",
    "      \x1b[1;37m\\\\N\\\\\\\\\x1b[1;31mXCCCCCCCCCCCCCCCCCCCCOF\"'                         \x1b[0m",
    "       \x1b[1;37m\\\\N\\\\\\\\\x1b[1;31mXCCCCCCCCCCCCCCCPF\"'                             \x1b[0m",
    "        \x1b[1;37m\\\\N\\\\\\\\\x1b[1;31m\"PCOCCCOCCFP\"\"                                  \x1b[0m",
    "         \x1b[1;37m\\\\N\\                                                \x1b[0m",
    "          \x1b[1;37m\\\\N\\                                               \x1b[0m",
    "           \x1b[1;37m\\\\N\\                                              \x1b[0m",
    "            \x1b[1;37m\\\\NN\\                                            \x1b[0m",
    "             \x1b[1;37m\\\\NN\\                                           \x1b[0m",
    "              \x1b[1;37m\\\\NNA.                                         \x1b[0m",
    "               \x1b[1;37m\\\\NNA,                                        \x1b[0m",
    "                \x1b[1;37m\\\\NNN,                                       \x1b[0m",
    "                 \x1b[1;37m\\\\NNN\\                                      \x1b[0m",
    "                  \x1b[1;37m\\\\NNN\\ \x1b[0m",
    "                   \x1b[1;37m\\\\NNNA\x1b[0m",
];

pub const MACOS: &[&str] = &[
    "\x1b[32m                 -/+:.          \x1b[0m",
    "\x1b[32m                :++++.         \x1b[0m",
    "\x1b[32m               /+++/.          \x1b[0m",
    "\x1b[32m       .:-::- .+/:-``.::-      \x1b[0m",
    "\x1b[32m    .:/++++++/::::/++++++/:`   \x1b[0m",
    "\x1b[33m  .:///////////////////////:`  \x1b[0m",
    "\x1b[33m  ////////////////////////`    \x1b[0m",
    "\x1b[1;31m -+++++++++++++++++++++++`     \x1b[0m",
    "\x1b[1;31m /++++++++++++++++++++++/      \x1b[0m",
    "\x1b[31m /sssssssssssssssssssssss.     \x1b[0m",
    "\x1b[31m :ssssssssssssssssssssssss-    \x1b[0m",
    "\x1b[35m  osssssssssssssssssssssssso/` \x1b[0m",
    "\x1b[35m  `syyyyyyyyyyyyyyyyyyyyyyyy+` \x1b[0m",
    "\x1b[34m   `ossssssssssssssssssssss/   \x1b[0m",
    "\x1b[34m     :ooooooooooooooooooo+.    \x1b[0m",
    "\x1b[34m      `:+oo+/:-..-:/+o+/-      \x1b[0m",
];

pub const WINDOWS: &[&str] = &[
    "\x1b[1;31m        ,.=:!!t3Z3z.,                 \x1b[0m",
    "\x1b[1;31m       :tt:::tt333EE3                \x1b[0m",
    "\x1b[1;31m       Et:::ztt33EEEL\x1b[1;32m @Ee.,      .., \x1b[0m",
    "\x1b[1;31m      ;tt:::tt333EE7\x1b[1;32m ;EEEEEEttttt33# \x1b[0m",
    "\x1b[1;31m     :Et:::zt333EEQ.\x1b[1;32m $EEEEEttttt33QL \x1b[0m",
    "\x1b[1;31m     it::::tt333EEF\x1b[1;32m @EEEEEEttttt33F  \x1b[0m",
    "\x1b[1;31m    ;3=*^```\"*4EEV\x1b[1;32m :EEEEEEttttt33@.  \x1b[0m",
    "\x1b[1;34m    ,.=::::!t=., \x1b[1;31m`\x1b[1;32m @EEEEEEtttz33QF   \x1b[0m",
    "\x1b[1;34m   ;::::::::zt33)\x1b[1;32m   \"4EEEtttji3P*    \x1b[0m",
    "\x1b[1;34m  :t::::::::tt33.\x1b[1;33m:Z3z..\x1b[1;32m  ``\x1b[1;33m ,..g.    \x1b[0m",
    "\x1b[1;34m  i::::::::zt33F\x1b[1;33m AEEEtttt::::ztF     \x1b[0m",
    "\x1b[1;34m ;:::::::::t33V\x1b[1;33m ;EEEttttt::::t3      \x1b[0m",
    "\x1b[1;34m E::::::::zt33L\x1b[1;33m @EEEtttt::::z3F      \x1b[0m",
    "\x1b[1;34m{3=*^```\"*4E3)\x1b[1;33m ;EEEtttt:::::tZ`      \x1b[0m",
    "\x1b[1;34m             `\x1b[1;33m :EEEEtttt::::z7       \x1b[0m",
    "\x1b[1;33m                 \"VEzjt:;;z>*`       \x1b[0m",
];

pub const LINUX: &[&str] = &[
    "                            \x1b[0m",
    "                            \x1b[0m",
    "                            \x1b[0m",
    "\x1b[1;30m         #####              \x1b[0m",
    "\x1b[1;30m        #######             \x1b[0m",
    "\x1b[1;30m        ##\x1b[1;37mO\x1b[1;30m#\x1b[1;37mO\x1b[1;30m##             \x1b[0m",
    "\x1b[1;30m        #\x1b[1;33m#####\x1b[1;30m#             \x1b[0m",
    "\x1b[1;30m      ##\x1b[1;37m##\x1b[1;33m###\x1b[1;37m##\x1b[1;30m##           \x1b[0m",
    "\x1b[1;30m     #\x1b[1;37m##########\x1b[1;30m##          \x1b[0m",
    "\x1b[1;30m    #\x1b[1;37m############\x1b[1;30m##         \x1b[0m",
    "\x1b[1;30m    #\x1b[1;37m############\x1b[1;30m###        \x1b[0m",
    "\x1b[1;33m   ##\x1b[1;30m#\x1b[1;37m###########\x1b[1;30m##\x1b[1;33m#        \x1b[0m",
    "\x1b[1;33m ######\x1b[1;30m#\x1b[1;37m#######\x1b[1;30m#\x1b[1;33m######      \x1b[0m",
    "\x1b[1;33m #######\x1b[1;30m#\x1b[1;37m#####\x1b[1;30m#\x1b[1;33m#######      \x1b[0m",
    "\x1b[1;33m   #####\x1b[1;30m#######\x1b[1;33m#####        \x1b[0m",
    "                            \x1b[0m",
    "                            \x1b[0m",
    "                            \x1b[0m",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FACT_COUNT;

    const ALL_KEYS: &[LogoKey] = &[
        LogoKey::Arch,
        LogoKey::Mint,
        LogoKey::Ubuntu,
        LogoKey::Debian,
        LogoKey::Gentoo,
        LogoKey::Fedora,
        LogoKey::MacOs,
        LogoKey::FreeBsd,
        LogoKey::OpenBsd,
        LogoKey::NetBsd,
        LogoKey::DragonFly,
        LogoKey::Cygwin,
        LogoKey::Linux,
    ];

    #[test]
    fn every_logo_pairs_with_a_full_fact_set() {
        for &key in ALL_KEYS {
            assert!(logo_for(key, false).len() >= FACT_COUNT);
            assert!(logo_for(key, true).len() >= FACT_COUNT);
        }
    }

    #[test]
    fn key_derivation_prefers_platform_over_distro() {
        assert_eq!(logo_key("whatever", PlatformTag::FreeBsd), LogoKey::FreeBsd);
        assert_eq!(logo_key("", PlatformTag::MacOs), LogoKey::MacOs);
    }

    #[test]
    fn key_derivation_matches_distro_substrings() {
        assert_eq!(logo_key("Arch Linux", PlatformTag::Linux), LogoKey::Arch);
        assert_eq!(
            logo_key("Ubuntu 22.04.3 LTS", PlatformTag::Linux),
            LogoKey::Ubuntu
        );
        assert_eq!(
            logo_key("Linux Mint 21.2", PlatformTag::Linux),
            LogoKey::Mint
        );
        assert_eq!(logo_key("SomeNew OS", PlatformTag::Linux), LogoKey::Linux);
        assert_eq!(logo_key("Unknown", PlatformTag::Unknown), LogoKey::Linux);
    }

    #[test]
    fn old_variant_only_changes_arch() {
        assert_ne!(logo_for(LogoKey::Arch, true), logo_for(LogoKey::Arch, false));
        assert_eq!(
            logo_for(LogoKey::Debian, true),
            logo_for(LogoKey::Debian, false)
        );
    }
}
