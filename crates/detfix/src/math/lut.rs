// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Checked-in polynomial coefficient tables for the transcendental kernel.
//!
//! Generated by `scripts/gen_poly_luts.py`; do not edit by hand. Row `i` of a
//! table with `N` segments holds the monomial coefficients (lowest order
//! first) of a polynomial in `t = z - i / N`, stored as Q63.128 words.

use crate::fp192::Scalar192;

const fn c(hi: i64, lo: u64, oo: u64) -> Scalar192 {
    Scalar192::from_signed_words(hi, lo, oo)
}

/// `1 / (1 + z)` for `z` in `[0, 1)`.
#[rustfmt::skip]
pub(crate) static RCP_POLY8_LUT64: [[Scalar192; 9]; 64] = [
    [
        c(1, 0x0000000000000000, 0x0000000000000000), c(-1, 0x000000000000001d, 0xd70490d5a622b48d), c(0, 0xfffffffffffebf1a, 0xb7e6767064c85b39),
        c(-1, 0x0000000003fb8a61, 0x16944eefec9177f5), c(0, 0xfffffffa4221b553, 0xe9ea482a705d7747), c(-1, 0x0000046e103aef3a, 0xb01602f8dba16ef1),
        c(0, 0xfffe0b7b43dd30db, 0x4ef04dfc27d0b9b4), c(-1, 0x007ee8e7daa176d6, 0x051fe0172fe1ab16), c(0, 0xeeb82486ad3115a4, 0x6b54343c8e20138a),
    ],
    [
        c(0, 0xfc0fc0fc0fc0fc0f, 0xc0fc0fc0fc0fc0fc), c(-1, 0x07d0fb1791f7276c, 0x881bb0e42df70228), c(0, 0xf45d8eadb72b14f3, 0x0fa8091fd1938edc),
        c(-1, 0x0f64dddae0c86650, 0xfe35076b78610970), c(0, 0xece7840fe3551d21, 0x82e97e4fd36389cd), c(-1, 0x16bd89a007c8427c, 0x9fdee8d7d294ee41),
        c(0, 0xe5aa1df793d43f65, 0x2a614a80b81f36e9), c(-1, 0x1e4987e42229a7f9, 0x2b7c0a770d72c879), c(0, 0xcfd9c17b45d5f4f9, 0x65c506f04c04cdd7),
    ],
    [
        c(0, 0xf83e0f83e0f83e0f, 0x83e0f83e0f83e0f8), c(-1, 0x0f47b2e4f74d574c, 0xc164fc7a1a96b5dc), c(0, 0xe96ce5ebab56fd18, 0xd02644979c1239e4),
        c(-1, 0x1da5eabe648a46e0, 0x1f2b34e73cf6b2e6), c(0, 0xdb7e241c5eded1f2, 0xdb720f119b144585), c(-1, 0x2b289a6982f4933d, 0x3b2d05d2e173dcd6),
        c(0, 0xce62d60627552282, 0xe35ffb3f1d5e009a), c(-1, 0x383a4533e16ca32d, 0xbf0b84482b76a16b), c(0, 0xb55a88e4dfd77a64, 0x16a77963b43b57ae),
    ],
    [
        c(0, 0xf4898d5f85bb3950, 0x3d226357e16ece54), c(-1, 0x166980994ac39b79, 0xde451c1a8fdb1290), c(0, 0xdf20f3f71fbe9ff6, 0xf4d3bf49a4d50166),
        c(-1, 0x2adcb39d80db6f0b, 0xe5fa5b824863cef4), c(0, 0xcb982a62185ca894, 0x1b932e15a98ec3fb), c(-1, 0x3d859588ea94dea3, 0xa8b842a6f86ee484),
        c(0, 0xb9c3f1a32064395d, 0x6ea440dcc241a88c), c(-1, 0x4edcb488eb0ab72e, 0x816b2d49dc4e9fc5), c(0, 0x9e8e95e61d80412e, 0x17cb07cc356e6f33),
    ],
    [
        c(0, 0xf0f0f0f0f0f0f0f0, 0xf0f0f0f0f0f0f0f1), c(-1, 0x1d3b597795b3d200, 0x65841a08cb41f417), c(0, 0xd56dc9e9cd743054, 0xb07ca1525b968990),
        c(-1, 0x372032e7b947d172, 0x05405162e83d535d), c(0, 0xbd0edf22c57226cd, 0xff89be09cf88f979), c(-1, 0x4e1021583be290b0, 0xd79bd6b2f95e8868),
        c(0, 0xa777496a4a5e09b7, 0xacedfde38297e53f), c(-1, 0x62a6fb79c9cb5269, 0x22d99a0200a28270), c(0, 0x8ae66a64d2473822, 0x4eb2ab3f8e724f10),
    ],
    [
        c(0, 0xed7303b5cc0ed730, 0x3b5cc0ed7303b5cc), c(-1, 0x23c1d7750ec96c66, 0xf69c7400ac2dddeb), c(0, 0xcc487ea5f9b3e21c, 0x7b6181814a864f24),
        c(-1, 0x42851b3989948cb5, 0x9dcc3d3a41571b97), c(0, 0xafbfe6bcca02d136, 0xb5b0c21add8edfd1), c(-1, 0x5cfc63b8fdcc0ce2, 0x8f431fc4fe86b95c),
        c(0, 0x9732a9ab7f0313e9, 0x02bbb064907910e3), c(-1, 0x73fd5b9d70c5d296, 0xd0dcfe1b01721224), c(0, 0x79e9eb6ff1652948, 0x6eb44057f0cf2d28),
    ],
    [
        c(0, 0xea0ea0ea0ea0ea0e, 0xa0ea0ea0ea0ea0ea), c(-1, 0x2a0140fe1e82d248, 0x052455d68ec93c98), c(0, 0xc3a7150908ac72e4, 0x4a885b10e46ff736),
        c(-1, 0x4d1e18a74a290035, 0x1db8ba11a7b94934), c(0, 0xa38cb640207dfe8e, 0xc0119a4b84a357e9), c(-1, 0x6a780ab93787cb8b, 0xc5ecf4e5aa6f7031),
        c(0, 0x88b605ef9eafb04b, 0x93cf8a33c7f08484), c(-1, 0x83351cbf7698fd10, 0xc9306e9116499e7a), c(0, 0x6b344e641cb1d5d9, 0x86b5bff152390676),
    ],
    [
        c(0, 0xe6c2b4481cd85689, 0x039b0ad12073615a), c(-1, 0x2ffd8ff8afea0fc8, 0xd35f68308938c2dc), c(0, 0xbb8064fbc662a70a, 0x7b99eec107addb6f),
        c(-1, 0x56fc09ee2e243b84, 0x3bd4b3d1b73b83ca), c(0, 0x985a1b18d679e899, 0x052302ee6b12c14c), c(-1, 0x76ab2da73f9dc685, 0xefe0fab6a6f8bfcd),
        c(0, 0x7bc9f71092a450be, 0xdd58fa7676bfba25), c(-1, 0x9096f52754351293, 0x21d3e233081afece), c(0, 0x5e70c71337c572cc, 0x2debc11a40559eaf),
    ],
    [
        c(0, 0xe38e38e38e38e38e, 0x38e38e38e38e38e4), c(-1, 0x35ba781948b0fce0, 0x2c85db8c712bd0cc), c(0, 0xb3cc0705f845d81e, 0x105e4cd2600a360a),
        c(-1, 0x602e32a55d6fb3fa, 0xcc109d880f3e60d7), c(0, 0x8e0fd2f97440ede4, 0x7c21fe7e30f07e69), c(-1, 0x81b90cf232818122, 0x94017978d88842f8),
        c(0, 0x703e76fbd44a7e8f, 0xb1d4f769b75a4205), c(-1, 0x9c6107fc232686a3, 0xcc768c55a722dc5f), c(0, 0x5357d129b716fc1e, 0x493bc6d4c981ca26),
    ],
    [
        c(0, 0xe070381c0e070381, 0xc0e070381c0e0704), c(-1, 0x3b3b6c9dc29b2a8b, 0xcc0ca35f0311516d), c(0, 0xac82421701388065, 0x81fe110b354b4a40),
        c(-1, 0x68c2675f8fc97173, 0x2e0adfc38fb3b1b1), c(0, 0x849831a3a826f7fc, 0x5b654c7f09ce8032), c(-1, 0x8bc0b61c8f3b5817, 0x93b62ba8833e30f0),
        c(0, 0x65e9cf96cb3e4448, 0x3061088dc3fea2b1), c(-1, 0xa6c88d1aa853127f, 0x93dcb04af8adeda3), c(0, 0x49acf6d483dc6e3f, 0x1c30facda64078de),
    ],
    [
        c(0, 0xdd67c8a60dd67c8a, 0x60dd67c8a60dd67d), c(-1, 0x4083a57e3938a912, 0xd569ad95ea9a75e3), c(0, 0xa59bfb3fce829794, 0x13d5a613da96f293),
        c(-1, 0x70c5348a8c9b6847, 0x06e25f5e324da7c1), c(0, 0x7bdfd28dbd392927, 0x9b92a73d8fe8ae83), c(-1, 0x94dd90216538b142, 0x0cdc4a6d1b67afd7),
        c(0, 0x5ca7b425f0001bd1, 0xd13fd49c2cf362a0), c(-1, 0xaffb31f7abba5ac0, 0xdc4590e5950c1688), c(0, 0x413cfcc3efea8376, 0x5491798fd4c055fd),
    ],
    [
        c(0, 0xda740da740da740d, 0xa740da740da740da), c(-1, 0x45962422c53ec289, 0xe187da8eab071b2a), c(0, 0x9f12a7232eb91e79, 0x29b109088aa5fdcc),
        c(-1, 0x784200bc6f23941d, 0x4095db95e40ee6c7), c(0, 0x73d554b35a13c59f, 0x5a8fe6d5434ff043), c(-1, 0x9d27d3f0c077940d, 0xde77e42383e03720),
        c(0, 0x54587e23393f3d79, 0x44447172e145fff7), c(-1, 0xb820402f28c71d6a, 0x6f3c645b768d354e), c(0, 0x39dc607499f09ca5, 0x7c9707c33ff55df1),
    ],
    [
        c(0, 0xd79435e50d79435e, 0x50d79435e50d7943), c(-1, 0x4a75b7aae72e1821, 0xc6ab7419d2f833a9), c(0, 0x98e03ce95844befd, 0x7f47bbae109ef4ce),
        c(-1, 0x7f432b059b7143d0, 0x04634a109a0192bf), c(0, 0x6c691f22a935b5de, 0x8ec9986255c74922), c(-1, 0xa4b4f40db55d14aa, 0xdce09b5b70d1010d),
        c(0, 0x4ce087b0f0a5c145, 0x2b02f98d76eba240), c(-1, 0xbf599400511b3c9a, 0x8165dd8c1325ce60), c(0, 0x33661970a47ca1b4, 0xdd7f4fdcf58c145f),
    ],
    [
        c(0, 0xd4c77b03531dec0d, 0x4c77b03531dec0d5), c(-1, 0x4f2500d2040f069f, 0xee6c70611370757e), c(0, 0x92ff2a89f5f9f5f7, 0x29e89c74b241b0c1),
        c(-1, 0x85d225c92d893a10, 0xe7f993ed40b817bd), c(0, 0x658d2d0ebb8fe72a, 0x4a39739dc6bc2601), c(-1, 0xab97f5d94608c378, 0xe07e8fa44aab2293),
        c(0, 0x46279eda9c63b8e5, 0xfdc8cc341436c210), c(-1, 0xc5c46b0e783bef0f, 0x7909724093cebd05), c(0, 0x2dba913b4fea1071, 0x7e66854c80efb6f4),
    ],
    [
        c(0, 0xd20d20d20d20d20d, 0x20d20d20d20d20d2), c(-1, 0x53a6757b08eba26f, 0x8f9cac7df8b877ab), c(0, 0x8d6a4a45b709f876, 0x37852799b8e4ce78),
        c(-1, 0x8bf78e8bb923f740, 0xaca2729589f435f7), c(0, 0x5f34e05e9acbe9a3, 0x6000802f1e2d2a48), c(-1, 0xb1e1beac4a9e9bcf, 0x86a4d859b907c6d9),
        c(0, 0x40188daa0b522c6d, 0xd68a829bdc1c7282), c(-1, 0xcb7a1236ac485629, 0x7e0de7a48e2f47d2), c(0, 0x28bec7fad2c96f95, 0x56d7bc02ac132d22),
    ],
    [
        c(0, 0xcf6474a8819ec8e9, 0x51033d91d2a2067b), c(-1, 0x57fc63ec2592ceab, 0x1f240b19c2da4d63), c(0, 0x881cd92d3f88e9b3, 0xa91c2dbea5c1bbcd),
        c(-1, 0x91bb4318ea2f214b, 0xe41668d3766bf185), c(0, 0x5954d9d7aa93acdf, 0xe5dee55cc740d0f2), c(-1, 0xb7a1568b7d20bf78, 0x718a0c53aa458648),
        c(0, 0x3aa0b3c425f14d04, 0x8ce21dcd684ec339), c(-1, 0xd090780d5952d3cc, 0xd1a1bd7e7626a072), c(0, 0x245b9dda2cf93bf0, 0x0b0343d641cceecc),
    ],
    [
        c(0, 0xcccccccccccccccc, 0xcccccccccccccccd), c(-1, 0x5c28f5c28f5c28f9, 0x02486c428e6cfb45), c(0, 0x83126e978d4fbc4b, 0xc58c2fd4cc6d9943),
        c(-1, 0x972474538f6247e8, 0x40f95373cba25c02), c(0, 0x53e2d622edb09675, 0xaf666fae5c1c252c), c(-1, 0xbce421f881c53869, 0xb6c083be8d0dc420),
        c(0, 0x35afaecf66b68fba, 0xf6240288d8fec46d), c(-1, 0xd51aa8976e0c55e7, 0x455aad683f945b7f), c(0, 0x207d3aa0fff6a837, 0x15b23b86a0e2f2c0),
    ],
    [
        c(0, 0xca4587e6b74f0329, 0x161f9add3c0ca458), c(-1, 0x602e32a55c33592b, 0x1970554ff6401177), c(0, 0x7e46f46d8ae71c42, 0x581182c348d36c65),
        c(-1, 0x9c39b6f876301eba, 0xb1fcf140f1a2138d), c(0, 0x4ed58f0890d21f98, 0xd074649dbefa13e1), c(-1, 0xc1b614269866c31f, 0x4208db4f7fb8a609),
        c(0, 0x31370f5abdad7b28, 0xbe353ff2961c8d43), c(-1, 0xd9293602ec3619c7, 0x4ddf0ccfa5ab7836), c(0, 0x1d128e36b37dadd3, 0x9bcad0fbc5dc779c),
    ],
    [
        c(0, 0xc7ce0c7ce0c7ce0c, 0x7ce0c7ce0c7ce0c8), c(-1, 0x640e02bdc0f3aa1e, 0x42224b1d1337a117), c(0, 0x79b6a033b45472a2, 0xa979281da721bf0f),
        c(-1, 0xa1011292f6b728e1, 0xd9c831600dd4d741), c(0, 0x4a24a0549d20803c, 0x151becf6376933d5), c(-1, 0xc621daa76d2375cd, 0x758cf6e847ff592d),
        c(0, 0x2d2a185beb3f116a, 0x9ada570423c29f15), c(-1, 0xdcca917a05ce3f98, 0x6b13df82ed0ee775), c(0, 0x1a0ce5c05a68e139, 0x66c957aaf7d1754e),
    ],
    [
        c(0, 0xc565c87b5f9d4d1b, 0xc2503159721ed7e7), c(-1, 0x67ca30fa507d745b, 0xe26a6fc616f45a09), c(0, 0x755decbd71be0343, 0x9e9004a76674cf3a),
        c(-1, 0xa5800ed9e01d0fba, 0xe9bd42c268b1d00b), c(0, 0x45c86feb9d941c66, 0x670d3be235e894e1), c(-1, 0xca31037a7e904a40, 0xbc5b0ad663d89e8a),
        c(0, 0x297d87abdfec3d23, 0x8bf70ad87132734e), c(-1, 0xe00b56a2471eb520, 0x76cded3758c93bb6), c(0, 0x175f91d272bf1de5, 0x5441e1da718724c9),
    ],
    [
        c(0, 0xc30c30c30c30c30c, 0x30c30c30c30c30c3), c(-1, 0x6b646d223fdad91d, 0x488653e93b3903b7), c(0, 0x7139947830df4514, 0xc29d7ac7eeb29108),
        c(-1, 0xa9bbbfa46d50fde4, 0x4eff08f39399c991), c(0, 0x41ba18a6e8f1daf8, 0xca6096ed4560b2d0), c(-1, 0xcdec1e465acf2e03, 0xd61c2344b0230422),
        c(0, 0x262766297f94b6f6, 0x46f8786f05fccc0e), c(-1, 0xe2f68be8cb296651, 0x9ef71701226fef0d), c(0, 0x14ff9ad29706382d, 0x1c3a82e3b307478e),
    ],
    [
        c(0, 0xc0c0c0c0c0c0c0c0, 0xc0c0c0c0c0c0c0c1), c(-1, 0x6ede4dbd2c9c0b7c, 0xb175004eab1f21a3), c(0, 0x6d468c3e5ce7cc25, 0x5814b80917933936),
        c(-1, 0xadb8cfa0db69feb8, 0xedf5c3f94257e895), c(0, 0x3df3579ea315d2ef, 0x15618dda1758f772), c(-1, 0xd15ad965608c8c36, 0x487c4afd88e25389),
        c(0, 0x231ede61c30a46f9, 0xd76d2ac76597af49), c(-1, 0xe595d96042b07bc3, 0x89d30bbce80422e8), c(0, 0x12e3812949e030cb, 0x69f53daf4334d196),
    ],
    [
        c(0, 0xbe82fa0be82fa0be, 0x82fa0be82fa0be83), c(-1, 0x723951d36b063afc, 0xbc93fe84949c9b52), c(0, 0x6981fea4276c69c9, 0xd18fefdcc84d30f3),
        c(-1, 0xb17b89f100a3d5ad, 0xaa452cb9f68293b6), c(0, 0x3a6e7b93c998fb1d, 0x33e2f7b1338940cb), c(-1, 0xd4841b56c976bfdc, 0x254648edf430c960),
        c(0, 0x205c18c99d47beac, 0xb56b9c3a5ca78d69), c(-1, 0xe7f1b7a9d50422f9, 0xc4b6ad95f2c5f129), c(0, 0x1103074f52ba9979, 0xcc94075d62756eea),
    ],
    [
        c(0, 0xbc52640bc52640bc, 0x52640bc52640bc52), c(-1, 0x7576e28a77cc51da, 0xebc28cd0d6e3f250), c(0, 0x65e947b1adc1e996, 0x2e259ee549ad51be),
        c(-1, 0xb507e2ccbe28d7f9, 0x9b0bafca43979ba9), c(0, 0x3726563717473a01, 0x2ef65ede7b1e74ce), c(-1, 0xd76e190fc0bde77c, 0x70a6c64453a398b8),
        c(0, 0x1dd81cbbe496d4c1, 0x97fe4e247971734e), c(-1, 0xea1198237f196601, 0xdf67f1e9b3b5f656), c(0, 0x0f5704198852f4cd, 0xba7858312b918343),
    ],
    [
        c(0, 0xba2e8ba2e8ba2e8b, 0xa2e8ba2e8ba2e8ba), c(-1, 0x789854a0cb1b8110, 0x11a202870fdf17eb), c(0, 0x6279f0ff6c4908f7, 0x4a10dab54546ef17),
        c(-1, 0xb8617f463d0d1e4e, 0xca2c452a27e7d216), c(0, 0x34162f127e7adb6b, 0xda6004d854f7aabb), c(-1, 0xda1e699684933173, 0x2380cc30a646fc17),
        c(0, 0x1b8cb58d1f3146c3, 0x57883e849d088e7e), c(-1, 0xebfc0763168b1f86, 0xd088d55d0a5bf05d), c(0, 0x0dd93bed420bad4c, 0xeda417f6fa3764c4),
    ],
    [
        c(0, 0xb81702e05c0b8170, 0x2e05c0b81702e05c), c(-1, 0x7b9ee9cbf756a5cd, 0x3874a67fff46f913), c(0, 0x5f31ae2b2b9f20a1, 0xd9131c197b8cb6d5),
        c(-1, 0xbb8bbc4881dc3c0a, 0x275c19116744caa6), c(0, 0x3139b7e2a7c07c01, 0x8e809c833aa49f44), c(-1, 0xdc9a17428545a92c, 0x182a5615b2280419),
        c(0, 0x19745b218babe638, 0x20d95e8b34b14ee0), c(-1, 0xedb6cada7b9ecd9d, 0x18262b7af9a8cd17), c(0, 0x0c843fc210b00c95, 0xd6d413857e2dff41),
    ],
    [
        c(0, 0xb60b60b60b60b60b, 0x60b60b60b60b60b6), c(-1, 0x7e8bd1fbb3a478dc, 0x78ad91fa9ce0d4ba), c(0, 0x5c0e599ca813887a, 0x01be1978127cef08),
        c(-1, 0xbe89b4e5ef0365a1, 0xd8bfbf5ee51ce65b), c(0, 0x2e8d023479e9f261, 0xeb015101cf9602e5), c(-1, 0xdee5aeefaeda5012, 0x248721b4e32b9b1c),
        c(0, 0x178a1d87f2546948, 0x56c410d6e1b9e76c), c(-1, 0xef46fa5e3216a4db, 0xeb4d2000f1dcbc4e), c(0, 0x0b53510549153c5e, 0xde9c5c1a7339bec7),
    ],
    [
        c(0, 0xb40b40b40b40b40b, 0x40b40b40b40b40b4), c(-1, 0x81602c8430598701, 0x6d6bb6f883bc3ed5), c(0, 0x590df19227237598, 0xf75419f0d23dc341),
        c(-1, 0xc15e4809bd35a99b, 0x6ff42e747c0e4b24), c(0, 0x2c0c76205cb0bb5c, 0x041d2f640f9fc548), c(-1, 0xe1054d682d72c2a2, 0x05fabb43b7f4a55a),
        c(0, 0x15c9932e77454231, 0xb8aa70b0c86fafef), c(-1, 0xf0b1162a3de8b2b6, 0x242277f22d6779b4), c(0, 0x0a42499b507ad750, 0x53025ddbb1521c58),
    ],
    [
        c(0, 0xb21642c8590b2164, 0x2c8590b21642c859), c(-1, 0x841d0931d8514cf2, 0xc660f12c9d1b93bc), c(0, 0x562e956e05581ad1, 0x6c56bc8031455aff),
        c(-1, 0xc40c1d9d340ad62f, 0x45a7a5948e6f40f8), c(0, 0x29b4ca01ca5173ed, 0x919ece2072cf0626), c(-1, 0xe2fcab3ebbe9f53a, 0xac5edf29259dc0d2),
        c(0, 0x142ec9565dc61d21, 0xd0eae8d16870458f), c(-1, 0xf1f919e8af3b4140, 0x951b6508c321323a), c(0, 0x094d875b11c0d365, 0xbf98f0b931a7a9a2),
    ],
    [
        c(0, 0xb02c0b02c0b02c0b, 0x02c0b02c0b02c0b0), c(-1, 0x86c369486da24a4b, 0xbad302305ce7ab94), c(0, 0x536e833f04617d7e, 0x20c0a722679cb056),
        c(-1, 0xc695ab2f78f3fa9b, 0x68068ed7ca09bf58), c(0, 0x2782fb0dfcb0c8cd, 0x576377e247ffd334), c(-1, 0xe4cf274ba627d3c4, 0xbf21bef5aa5dd3e1),
        c(0, 0x12b63678f21c2b1e, 0x21492488531f1ab5), c(-1, 0xf3228d28e3387694, 0xb6fb26291ee32a1f), c(0, 0x0871da7ad2901b30, 0x1aecddc2dfe8eaea),
    ],
    [
        c(0, 0xae4c415c9882b931, 0x0572620ae4c415ca), c(-1, 0x8954406f410397b3, 0xb3d1fe40cc26e0a5), c(0, 0x50cc157dc8d7661e, 0x5515893999efa18f),
        c(-1, 0xc8fd382d154d29e6, 0xdbf50ecb28366ed6), c(0, 0x257446b028903578, 0x67385c339c029c9b), c(-1, 0xe67fcff7e7e4a33b, 0x5a8d1bcb8bac2e6f),
        c(0, 0x115cae5b06ba9820, 0xfab49d30609e3c68), c(-1, 0xf43091a5711370a4, 0x3f72cc3543acf613), c(0, 0x07ac767bd084e97d, 0xe3c5012a0fcdfea7),
    ],
    [
        c(0, 0xac7691840ac76918, 0x40ac7691840ac769), c(-1, 0x8bd0758c191342a2, 0x1a104b7202bfd1a8), c(0, 0x4e45c0fa8b66dfa7, 0x9584db9cbe538d1e),
        c(-1, 0xcb44e1b2d55d933f, 0x67ec20bba6717831), c(0, 0x23862494e2346493, 0x2ac08e5e175d2aad), c(-1, 0xe8116b7c07dc444d, 0x31c96178639ad777),
        c(0, 0x101f5795f2683a41, 0x2f65c602dd9840c9), c(-1, 0xf525efa8708a7817, 0x6b8039a5e4afb2c9), c(0, 0x06fae5347600fc14, 0xf4be3f42f68db398),
    ],
    [
        c(0, 0xaaaaaaaaaaaaaaaa, 0xaaaaaaaaaaaaaaab), c(-1, 0x8e38e38e38e38e39, 0x6b233193b706c90b), c(0, 0x4bda12f684bd9b7d, 0x8c7723e6e0987ae2),
        c(-1, 0xcd6e9e06523e55bd, 0x48d6add84c373344), c(0, 0x21b64151047ca5f3, 0xac470970de42da9b), c(-1, 0xe9867f3359088ce2, 0x940f6f38fc1f68ad),
        c(0, 0x0efba2650d53dc17, 0xe8ee78c082414cdb), c(-1, 0xf60520d1c87f1823, 0x95b1880c1840dacc), c(0, 0x065afba841e9a6c1, 0xdb4286f9924e6bc1),
    ],
    [
        c(0, 0xa8e83f5717c0a8e8, 0x3f5717c0a8e83f57), c(-1, 0x908e5a2ad34c19cb, 0x87ecd6b28ce0211a), c(0, 0x4987af65104c7315, 0x127d342fc7bdc693),
        c(-1, 0xcf7c3fbd51ae5b15, 0x11664e7be6ceacb6), c(0, 0x20027992d4f2f632, 0xa7114e61916cd89b), c(-1, 0xeae1562007b236df, 0x4c5f35effa4de90c),
        c(0, 0x0def408d8611e316, 0x64fe769cd5d53ab9), c(-1, 0xf6d059791db28677, 0xd4ac55eed431e034), c(0, 0x05cad0693a335f8c, 0x164668b655a17f3e),
    ],
    [
        c(0, 0xa72f05397829cbc1, 0x4e5e0a72f0539783), c(-1, 0x92d19e8c1a040d39, 0x0c39b6060c5646be), c(0, 0x474d4f50e9c9174c, 0x9426fa023231f46d),
        c(-1, 0xd16f789c23767f39, 0x98132af748491e27), c(0, 0x1e68d5ce31b107bb, 0xf35417ef381cdd0b), c(-1, 0xec2406b8ac5cfb7f, 0x95c553a6b9f97422),
        c(0, 0x0cf81e3c3e13eece, 0xf8471ff83c409e08), c(-1, 0xf78990dc79afc64f, 0xdbf097a209674704), c(0, 0x0548b3496199bd9e, 0xaedde9c04a0cf061),
    ],
    [
        c(0, 0xa57eb50295fad40a, 0x57eb50295fad40a5), c(-1, 0x95036bf3fc225fa6, 0xf4ab9bfad59e2aad), c(0, 0x4529bf6245bb3782, 0x243a1a9a1f889315),
        c(-1, 0xd349dc323f944693, 0xd50497098e5315e8), c(0, 0x1ce7865664118b03, 0x17f01bff47ed060d), c(-1, 0xed507814f4534f62, 0x6635bad32696e414),
        c(0, 0x0c145bba5825a013, 0xa85b35312d6d90f1), c(-1, 0xf8328845951a9cf4, 0x1de9e03801c94299), c(0, 0x04d3262b8b10ef55, 0x42d60748f63d0e79),
    ],
    [
        c(0, 0xa3d70a3d70a3d70a, 0x3d70a3d70a3d70a4), c(-1, 0x972474538ef34d6a, 0x706cef0262bf7642), c(0, 0x431bde82d7b6310f, 0xcc20c0cacd517a54),
        c(-1, 0xd50ce23b9ef39869, 0x3a377c1b4b892c58), c(0, 0x1b7cdfd9c661ae7d, 0xa1cdf4215a123a49), c(-1, 0xee68668c33ef108d, 0xc62873cca7746b6e),
        c(0, 0x0b4247dd64ee5eff, 0x44670992ef3544cd), c(-1, 0xf8ccd1499f58c7ab, 0xfebd301970e02d97), c(0, 0x0468d6ca562444cb, 0x5549fd7d47bb4c31),
    ],
    [
        c(0, 0xa237c32b16cfd772, 0x0f353a4c0a237c33), c(-1, 0x993560d805d27a04, 0x1575d260190787f0), c(0, 0x41229c9d2254986f, 0xc0f58b5a2a4ae321),
        c(-1, 0xd6b9e8cc96a523a3, 0xa642db989bfe8db8), c(0, 0x1a275834cb24ca0e, 0x4e1d924845728fa7), c(-1, 0xef6d67d659a9c16c, 0xe871f811dd7d970a),
        c(0, 0x0a805b1bbdeb2396, 0xb8bb14c2e267eb90), c(-1, 0xf959d34239c9658e, 0xd2549909c59051be), c(0, 0x040899525d8d1af5, 0xcba100955ee653df),
    ],
    [
        c(0, 0xa0a0a0a0a0a0a0a0, 0xa0a0a0a0a0a0a0a1), c(-1, 0x9b36d26e09a540dc, 0xc2399f2047a3a0c6), c(0, 0x3f3cf974aea75bb7, 0xc3a53e2baacbfb4a),
        c(-1, 0xd852364d6041809a, 0x097b759f551d2046), c(0, 0x18e5839328d39617, 0xa546d29763b404c9), c(-1, 0xf060eebdacef73dc, 0xc9d7fc9292ba046a),
        c(0, 0x09cd3330beac7bde, 0x8205703be934c567), c(-1, 0xf9dad01a0045b17c, 0x0331f281e4e0365a), c(0, 0x03b163b1e0966b46, 0xe73e8781ddd23378),
    ],
    [
        c(0, 0x9f1165e7254813e2, 0x2cbce4a9027c4598), c(-1, 0x9d29623c2e6d4f9b, 0x7e79f87dbd4bff6f), c(0, 0x3d6a0395037679b0, 0xbc1b3dadb4ca59b3),
        c(-1, 0xd9d6fb49eef884b3, 0x7d3a4b1061918588), c(0, 0x17b611d6fb2f2f21, 0xb26afeda714d1e98), c(-1, 0xf1444e6dfd207fc6, 0x15abdcb9d2d41cf5),
        c(0, 0x09278f3f3a7741f8, 0xba0c99cc66d8ac74), c(-1, 0xfa50e88343b19f52, 0x11bf41b1a8370754), c(0, 0x036249849af914a5, 0x773867c5dc26ae3e),
    ],
    [
        c(0, 0x9d89d89d89d89d89, 0xd89d89d89d89d89e), c(-1, 0x9f0da21535048b5c, 0xa41e7a6b6285038d), c(0, 0x3ba8d75569384536, 0x061bca83bb1b4bbd),
        c(-1, 0xdb49541a356f5d5b, 0x217f67d16aed162a), c(0, 0x1697cc3e98500de0, 0x67f6b29c480fdc0b), c(-1, 0xf218bd6c5a572540, 0x67b558cbaeef0403),
        c(0, 0x088e4c62da94e046, 0xbd0364e571a33a5c), c(-1, 0xfabd1fac737e1af5, 0xe9fb6124a251f7e4), c(0, 0x031a788638ed0ff3, 0x12e2df792333ed30),
    ],
    [
        c(0, 0x9c09c09c09c09c09, 0xc09c09c09c09c09c), c(-1, 0xa0e41ce2b83a248c, 0x8ef56c1c867f84f1), c(0, 0x39f89defb6b7fae4, 0xeac7eddc9f7a17e3),
        c(-1, 0xdcaa4a6693187c1f, 0x318ae971af507c3f), c(0, 0x15899342a7dee9c4, 0x3553f59d913a663d), c(-1, 0xf2df58411a13666f, 0xd03788126c358d39),
        c(0, 0x080062a30de5e73f, 0x2001bd6e013f05cf), c(-1, 0xfb205e830216ee6f, 0x1b7e53b48291941e), c(0, 0x02d93578fb4597b5, 0xb57bb7b28d1c4d15),
    ],
    [
        c(0, 0x9a90e7d95bc609a9, 0x0e7d95bc609a90e8), c(-1, 0xa2ad5708d7148169, 0xd2dcbc98a6ac1c5a), c(0, 0x38588ca88ca17f70, 0x5784a6e8a3d7c5e1),
        c(-1, 0xddfad68bbe70194a, 0x5f2655b2712c7ab3), c(0, 0x148a5ca6c21c23ea, 0xe499f630824208b5), c(-1, 0xf39923dcbec701eb, 0x9730819008576fcb),
        c(0, 0x077ce23be8aaa13a, 0x948f924347b07a6e), c(-1, 0xfb7b769343d8b4af, 0xe85e69ab56ac3ed8), c(0, 0x029dd970c9a53cfe, 0xe524d42c66b4904f),
    ],
    [
        c(0, 0x991f1a515885fb37, 0x072d753bd02647c7), c(-1, 0xa469cec361c7c971, 0x35b61d8eb3bebfcf), c(0, 0x36c7e4078c180b8f, 0x2134df87e42b4640),
        c(-1, 0xdf3be0e12b0880c0, 0x7ba5dbd38dfd7bf2), c(0, 0x139931b77db9713e, 0x1baf5b5d563749d4), c(-1, 0xf4470fbf544d3b0a, 0x8c4b6e946b002f6c),
        c(0, 0x0702f132ce19d8ec, 0xd6b07104791bcde9), c(-1, 0xfbcf2491d0e509ec, 0xa53738af0556aee8), c(0, 0x0267cf7533254983, 0xa5c274b3a5b065a6),
    ],
    [
        c(0, 0x97b425ed097b425e, 0xd097b425ed097b42), c(-1, 0xa619fc7d03dce226, 0xcacd64901a702af0), c(0, 0x3545ef1e36998b2f, 0x55965d6602debafa),
        c(-1, 0xe06e42e49d4bca6d, 0xcd9dbc6b284fe13a), c(0, 0x12b52db161d85b7c, 0x6458f8756eb36a81), c(-1, 0xf4e9f7e8ef766145, 0x293e1c888dfe77f3),
        c(0, 0x0691c92e04e0d3d0, 0xd1f4301be7795177), c(-1, 0xfc1c1299430746df, 0xb51b564d60a9f53e), c(0, 0x0236926ec8cd361d, 0xbfa7a1647a8097c2),
    ],
    [
        c(0, 0x964fda6c0964fda6, 0xc0964fda6c0964fe), c(-1, 0xa7be5320dbf3acd4, 0x42205af064f89b8f), c(0, 0x33d202dc442369f1, 0x2c69d6bf29532c5a),
        c(-1, 0xe192c84d592fb921, 0xdddf50109c2fdaaa), c(0, 0x11dd7c4caf261b74, 0xbf973643984a42f5), c(-1, 0xf582a69937848876, 0xa91e10b169bbf851),
        c(0, 0x0628b587735525f3, 0x404c8b2c5be36cbc), c(-1, 0xfc62da25b6f77496, 0x617c28bf1e887337), c(0, 0x0209ab55dec0066f, 0x6ecf6ab73152127d),
    ],
    [
        c(0, 0x94f2094f2094f209, 0x4f2094f2094f2095), c(-1, 0xa9574066e86385cc, 0x2cc69d474c0563e4), c(0, 0x326b7d705835cc9d, 0x08e0bb0f23f01d6b),
        c(-1, 0xe2aa30091bd2bd90, 0x4d2bec776773872a), c(0, 0x1111586a621f27a3, 0x96120eb726269edb), c(-1, 0xf611d5e331f60407, 0xddb482c7b8724d02),
        c(0, 0x05c71193b62d2e76, 0xc3f25195835f9db9), c(-1, 0xfca405d63a7a2ce4, 0xdf61cd6bd28f8793), c(0, 0x01e0af9a249fc322, 0x2ad364ef54a5b675),
    ],
    [
        c(0, 0x939a85c40939a85c, 0x40939a85c40939a8), c(-1, 0xaae52d1ba7a76793, 0x953c2c5cbec91ff6), c(0, 0x3111c5b41743388f, 0x73f68aa55694d66d),
        c(-1, 0xe3b52d24d93c0f17, 0x4c8691c796020dfe), c(0, 0x10500adf32d0c98a, 0x6a38812107efef1f), c(-1, 0xf6983119effccd11, 0xd61786dc2bf77812),
        c(0, 0x056c47179a45d5d4, 0x27627e62d91f39b2), c(-1, 0xfce012fb3f697322, 0xfd5e66419f467744), c(0, 0x01bb3fbbb4f77068, 0xbba3cbc57932b85f),
    ],
    [
        c(0, 0x9249249249249249, 0x2492492492492492), c(-1, 0xac687d6343eb1a1f, 0x76084501db8c4f70), c(0, 0x2fc44aa2b49e38fd, 0x17e66d1678549fee),
        c(-1, 0xe4b467a30684e900, 0x6e5bb8073fd2be1a), c(0, 0x0f98e959ad8687e1, 0x1e7fd7287fdbd8bd), c(-1, 0xf716561a36b6eb87, 0x3be844c5d8574f40),
        c(0, 0x0517cce6bbd315f5, 0x4ed2985d048a8344), c(-1, 0xfd1772f84016ab22, 0xf71f03bdacf404d0), c(0, 0x0199060f3e93f57c, 0xb91105a2c9a3b2a5),
    ],
    [
        c(0, 0x90fdbc090fdbc090, 0xfdbc090fdbc090fe), c(-1, 0xade190f89a221f65, 0x7d70859cfd5f4c31), c(0, 0x2e8282d9254e15df, 0xb21a108568a27a45),
        c(-1, 0xe5a87d410cde22b7, 0x09f73eb200d1c317), c(0, 0x0eeb5560cd1144fc, 0xfb57b3a96b8bae13), c(-1, 0xf78cd674c535fee4, 0xcc6072a18bf581de),
        c(0, 0x04c925a6af2bcc52, 0xf2a04fe4deeb0d17), c(-1, 0xfd4a8c7df62cc89d, 0x510d8b84ce066b37), c(0, 0x0179b5a7c858e69c, 0x26a4bdcfa1363d6f),
    ],
    [
        c(0, 0x8fb823ee08fb823e, 0xe08fb823ee08fb82), c(-1, 0xaf50c36866bf2729, 0x25a6fdc463c49b73), c(0, 0x2d4bec1f36992c5a, 0xdacd9dff104094f0),
        c(-1, 0xe692022d5a9fcca2, 0x557afc4652d9a940), c(0, 0x0e46bb68c3ee89f9, 0x5999843ebf4358dd), c(-1, 0xf7fc387c738b1d29, 0x2464f3b17605737a),
        c(0, 0x047fdeb2a47884eb, 0x43fa8f776fe5fc8a), c(-1, 0xfd79bca1d597c002, 0xff47c9828ca49445), c(0, 0x015d09614dfdf983, 0x3df5503278a1b667),
    ],
    [
        c(0, 0x8e78356d1408e783, 0x56d1408e78356d14), c(-1, 0xb0b66c48dc5cfe0b, 0x95ff839799d43e4b), c(0, 0x2c200af8d7ba6f73, 0x08dd480e51d7dca5),
        c(-1, 0xe77181af64563a9e, 0x8d28938a70867974), c(0, 0x0daa91fbde90973e, 0x340735131cb87ad6), c(-1, 0xf864f83b0a916280, 0x5562c11506f30611),
        c(0, 0x043b8f1bf2b78af1, 0x2bb70d173f8a1790), c(-1, 0xfda557d6e504bbe9, 0xa1d24e6fb9796e84), c(0, 0x0142c3081704f668, 0x18bb489a63e586b0),
    ],
    [
        c(0, 0x8d3dcb08d3dcb08d, 0x3dcb08d3dcb08d3e), c(-1, 0xb212df6de362ee0a, 0x6e175524d842561f), c(0, 0x2afe6a3ef54dd413, 0xfe29441b125d6522),
        c(-1, 0xe8477ec2c81e6d32, 0x9a21e4e825aeb1e5), c(0, 0x0d1658f59f4acccf, 0xc8901e98e44f96ad), c(-1, 0xf8c7884f63842990, 0x3a45953dfbe955f1),
        c(0, 0x03fbd6c4622f2583, 0x7b650f3c6b0429be), c(-1, 0xfdcdaacb89efd1a7, 0x581d7ab59c47c05e), c(0, 0x012aaa993525464a, 0xb4850e7e9d1010cd),
    ],
    [
        c(0, 0x8c08c08c08c08c08, 0xc08c08c08c08c08c), c(-1, 0xb3666d1a3cda8113, 0x5ad0c639ab2e92a0), c(0, 0x29e69abf52adab78, 0xe7562e42a573fd2e),
        c(-1, 0xe91474a6a9361ebd, 0xddd93c32d83da593), c(0, 0x0c8998ce64bbfdae, 0x14602ba8316961e5), c(-1, 0xf92452b717330670, 0xf62c41ab4f6256b8),
        c(0, 0x03c05d8f6c9abec7, 0x01d6151091f746b2), c(-1, 0xfdf2fb2f6c0aacc0, 0x3abfcb72ef869a97), c(0, 0x01148d990fc7cf24, 0xc0653e7256a2f95e),
    ],
    [
        c(0, 0x8ad8f2fba9386822, 0xb63cbeea4e1a08ae), c(-1, 0xb4b1622dbe40dd37, 0x00f8fc10c619c186), c(0, 0x28d832e2d9e57e9c, 0x90d838c840d65eb2),
        c(-1, 0xe9d8d7624010b10b, 0xed5622ff46c0e891), c(0, 0x0c03e1f616aa33a6, 0x5bbdff998d06b338), c(-1, 0xf97bb985c5b05b68, 0x86bc385e16d28fe7),
        c(0, 0x0388d2a7fbe7be6f, 0x11e1eb0301c3561d), c(-1, 0xfe15886430a33533, 0xf5bfc46f8d4e0e39), c(0, 0x01003e7d49dacc2b, 0xe81932f8eb7716df),
    ],
    [
        c(0, 0x89ae4089ae4089ae, 0x4089ae4089ae408a), c(-1, 0xb5f40850d810ebbc, 0x297f601c42dad587), c(0, 0x27d2ce59e626398e, 0x4d220fb68321026f),
        c(-1, 0xea95143f843b043a, 0xfbb7a93a26015420), c(0, 0x0b84cc3c7bbc4a38, 0xbb652ec1f3d5c95f), c(-1, 0xf9ce178bc7a267eb, 0xdfc33028c757a248),
        c(0, 0x0354ebd878bab7ad, 0x7a72342d63a213ec), c(-1, 0xfe358c1b787c8c0c, 0x23f317205acda80f), c(0, 0x00ed9427a8afe92c, 0x7e78b2b84d510527),
    ],
    [
        c(0, 0x8888888888888888, 0x8888888888888889), c(-1, 0xb72ea61d950c83fb, 0x819c13fa5e8b2f59), c(0, 0x26d60dce16e84186, 0x9171ded13358f157),
        c(-1, 0xeb49923cc09727d2, 0xc449185fd1bb0dfc), c(0, 0x0b0bf645fcdd88eb, 0xaa371df775b7ef22), c(-1, 0xfa1bc0ede906d67b, 0x9fb5172b9c918f21),
        c(0, 0x032464f33986b09f, 0xaecf90b839d61090), c(-1, 0xfe533ae43f8071d3, 0xa9f3df0d54609e40), c(0, 0x00dc696fefce6c0a, 0x743378c6c5341db0),
    ],
    [
        c(0, 0x8767ab5f34e47ef1, 0x30a9419637021d9f), c(-1, 0xb8617f463ce21e2d, 0xf805776b48ef4773), c(0, 0x25e19699433c3ba2, 0x6ca076a1dec33e25),
        c(-1, 0xebf6b275cfc017e3, 0x816713e2664206e3), c(0, 0x0a99050bb9d56672, 0xa6dfd60a01486da3), c(-1, 0xfa6503afa1784656, 0xa58333200b4c0fc6),
        c(0, 0x02f6ff499ae2038b, 0x0bd63f6d1fa4e6b0), c(-1, 0xfe6ec4a97c459ffc, 0xec7e391d1213487e), c(0, 0x00cc9cbae8673405, 0xa5feddc656a7a1eb),
    ],
    [
        c(0, 0x864b8a7de6d1d608, 0x64b8a7de6d1d6086), c(-1, 0xb98cd4b9c1ab1a36, 0x66506ae3c500482b), c(0, 0x24f512812d49e955, 0x1773b7e2c2d7b8a5),
        c(-1, 0xec9cd085ad7e8f6b, 0xcedcf01efca1d0ba), c(0, 0x0a2ba365ee22ce02, 0x18b23741ad35fab2), c(-1, 0xfaaa2831172fbbe2, 0x1eb85a6e4e021b1c),
        c(0, 0x02cc81303af2570d, 0x6ea9e39d67bdbb51), c(-1, 0xfe885523a453007a, 0x67a8ccb18d509a9e), c(0, 0x00be0f9d04e52f50, 0xbe66ce116da0946e),
    ],
    [
        c(0, 0x8534085340853408, 0x5340853408534085), c(-1, 0xbab0e4c61cde12b7, 0x07b74eef8a218c42), c(0, 0x24102f779dba3c8b, 0x3c9fb47183054364),
        c(-1, 0xed3c42e0faf1cc7a, 0x55849ccb462f3aa6), c(0, 0x09c3819fbdd2f829, 0x24654a7888c6faab), c(-1, 0xfaeb71a2177ade43, 0xd8d99070e68814a3),
        c(0, 0x02a4b58efd1d28a6, 0x661546e6796b07ce), c(-1, 0xfea0143e8829a11a, 0x62671ce8cdd02a92), c(0, 0x00b0a687432e5dd0, 0x9f6bdd69021a04bc),
    ],
    [
        c(0, 0x8421084210842108, 0x4210842108421084), c(-1, 0xbbcdeb38bdab49ca, 0x3b14ed2a8a69c77f), c(0, 0x23329f5e95d923ca, 0xd885a819b3b8886c),
        c(-1, 0xedd55b2a053ec291, 0xbc75cd0154ab2418), c(0, 0x0960551398298449, 0x4d53d14f1e48f85d), c(-1, 0xfb291e6b10b00df5, 0x555384fdab08f682),
        c(0, 0x027f6b7ba1610260, 0x7e80feb7b7c736ed), c(-1, 0xfeb62674ce81c8df, 0x28605d17247179f6), c(0, 0x00a4487d1ba37818, 0x537c551f4e78ca3b),
    ],
    [
        c(0, 0x83126e978d4fdf3b, 0x645a1cac083126e9), c(-1, 0xbce4217d2849cb25, 0x36a8d3c7b54c914a), c(0, 0x225c17d04dad28fc, 0x9a95b4a014534514),
        c(-1, 0xee68667ed2173cfa, 0xd06c0a482fa8e7fc), c(0, 0x0901d7cf71c9bfdf, 0xb816f9f2cd4936cc), c(-1, 0xfb63688cfe57c608, 0xad799ee4e510ec3d),
        c(0, 0x025c75dddc784583, 0x70fbd3383d07d01d), c(-1, 0xfecaad222ff726d3, 0xa3728ee412890805), c(0, 0x0098ded270b25595, 0x6dfcc2472157759d),
    ],
    [
        c(0, 0x8208208208208208, 0x2082082082082082), c(-1, 0xbdf3beb9e37db5d3, 0x45bb37d85b0ef641), c(0, 0x218c51eab925bba5, 0x515619425ae16ebd),
        c(-1, 0xeef5adc1aa16ac70, 0x4175bbc9bd55a315), c(0, 0x08a7c84029e74615, 0x902472406692a561), c(-1, 0xfb9a85f91feac494, 0x83bf94525ba45704),
        c(0, 0x023bab1bfbb7824f, 0xe8da60e8f85c95ef), c(-1, 0xfeddc6cd72e67e6c, 0x2ceb63cbae78a194), c(0, 0x008e54f093aa6caa, 0x94a31e81a0a08c78),
    ],
    [
        c(0, 0x8102040810204081, 0x0204081020408102), c(-1, 0xbefcf7ebcf8efdba, 0xfd4202151c0ec7a4), c(0, 0x20c30a1e54e24554, 0x134f1040d5496166),
        c(-1, 0xef7d75dc8ead52c7, 0xfde9ae4626eb3508), c(0, 0x0851e8e37e0e5835, 0x5f49398bf6f48b56), c(-1, 0xfbcea8e13ccdf725, 0x350e0590b0c77f16),
        c(0, 0x021ce4cf39fa18de, 0x796fdd9608282e35), c(-1, 0xfeef8f6b09df6a9f, 0xf98fb89fbfe4c676), c(0, 0x00849821901f6ea9, 0x618d46c0da16fbe2),
    ],
];

/// `sqrt(1 + z)` for `z` in `[0, 1)`.
#[rustfmt::skip]
pub(crate) static SQRT_POLY7_LUT64: [[Scalar192; 8]; 64] = [
    [
        c(1, 0x0000000000000000, 0x0000000000000000), c(0, 0x7fffffffffffffa6, 0xe47fd54a81dd84ab), c(-1, 0xe00000000002df6d, 0x0f44f99c3c65f2bb),
        c(0, 0x0ffffffff90775c3, 0x0bebb9b869e3df40), c(-1, 0xf60000078e57aa91, 0x9dbe50cefdbcd477), c(0, 0x06fffbbfb0d38e6a, 0xb128b39aa7346af3),
        c(-1, 0xfac14b53d3550856, 0x9992c219cd3efe2c), c(0, 0x03ec00fa0e824477, 0x30e972d3be930ee1),
    ],
    [
        c(1, 0x01fe03f61bad04b1, 0x068572febc925ad1), c(0, 0x7f02f62283c76476, 0x0a1782325dc6d0b1), c(-1, 0xe0bc513294bdc91c, 0xa08ba79e5b8c6fb9),
        c(0, 0x0f64464d796df588, 0xdaade36bfb9ef9dc), c(-1, 0xf6873739806deb69, 0x6efd007d31fb97b5), c(0, 0x068738a1455fb6e7, 0x30d746fbcced2f31),
        c(-1, 0xfb2f0266ef3d481e, 0x5ff09a54966f492a), c(0, 0x038c74b664d6e8f7, 0x5edc2e0350a8ad3f),
    ],
    [
        c(1, 0x03f81f636b80bbc4, 0x0dd15fb55cfe8795), c(0, 0x7e0bb220b03e6a46, 0xbf917df8409242cd), c(-1, 0xe171873de4cc5d7a, 0xea41a80a85471dba),
        c(0, 0x0ed0b6abaa8f39ee, 0x7ad34448f3342681), c(-1, 0xf70562c4be022c3d, 0x7dec159a9016c306), c(0, 0x061842206b5964b5, 0x075b738eb98b4615),
        c(-1, 0xfb92492eaabc53fa, 0x1f32e385de5fc6b6), c(0, 0x03373f60da620217, 0xd11eaae838158e4d),
    ],
    [
        c(1, 0x05ee68efad48ac79, 0x416e168ec126408d), c(0, 0x7d19fca052c32fbd, 0x6f595247b1d26ff5), c(-1, 0xe22000ce404db2e7, 0xe13ec588bc5e19b6),
        c(0, 0x0e44c64d3bdbe6f4, 0x90f3c7e460359f01), c(-1, 0xf77b3d36c58f683e, 0x68df534529ee9ef2), c(0, 0x05b22b2d94c2ed95, 0x4e200155776d76e6),
        c(-1, 0xfbec40c475fda383, 0x56887841bfc73f00), c(0, 0x02eb20feda596e4b, 0x688c83a4366ae462),
    ],
    [
        c(1, 0x07e0f66afed06f5a, 0xc8f119530a885d61), c(0, 0x7c2da1234abc706a, 0x782c9a07cbdc4026), c(-1, 0xe2c816520c8a321c, 0x260de1568acc80fd),
        c(0, 0x0dbff57f04b9562c, 0x733ff0bd73454029), c(-1, 0xf7e96f9bf6ec2897, 0x2532ca444bc64e42), c(0, 0x0554203327e8b65e, 0x50fe589d5ff14d21),
        c(-1, 0xfc3de751a2875d9c, 0x420eafb7e4a582a1), c(0, 0x02a704350c4c9a59, 0x673fced4a4121f5e),
    ],
    [
        c(1, 0x09cfdcd8ed008fe7, 0x9d5643080c8e39ab), c(0, 0x7b466dd79e255c82, 0xbdee22bc5ea7d957), c(-1, 0xe36a1a78ab1a5e27, 0x899befe8493c071a),
        c(0, 0x0d41ce9f35f250f8, 0x554d80c06b63d0e1), c(-1, 0xf850935dce2406e8, 0x77236d29c9f7ff8d), c(0, 0x04fd640669dabad0, 0xf48171953e0f7db9),
        c(-1, 0xfc881cb664114737, 0x2c0efe07dde44ced), c(0, 0x0269f8174798c9a0, 0xdbfc8e7bd423bf48),
    ],
    [
        c(1, 0x0bbb307acafdaead, 0x568979062d2866cd), c(0, 0x7a64336b557b485c, 0x0d264463de5108ac), c(-1, 0xe4065aa5a3530234, 0xf542d80b6df89f9b),
        c(0, 0x0cc9e5309bd2836a, 0xe629acd7cc9b0f1c), c(-1, 0xf8b133e81711e480, 0x65af838ca04cdb50), c(0, 0x04ad4d40068ffd1d, 0xad4938af5d8fcbc7),
        c(-1, 0xfccba683f888473b, 0xb367cfe70d7f2297), c(0, 0x02332af0f058d61b, 0x20d4a56ddbc4b052),
    ],
    [
        c(1, 0x0da304d95fb05c3d, 0xb2d12f554f359f26), c(0, 0x7986c4e3c62b6deb, 0x7a7ddea105c0f089), c(-1, 0xe49d1f594a5548f5, 0xbd9eadc3679b2ea9),
        c(0, 0x0c57d5069dfcf1d4, 0x81f83ee7cb8437dd), c(-1, 0xf90bd01c987ded77, 0x147378dfc97c42f2), c(0, 0x046343ed44f16ceb, 0x1ae6ed01cbf122f9),
        c(-1, 0xfd0933650fee1d50, 0x565cd2950701705f), c(0, 0x0201e5dbf882fa30, 0xe2b5e233a20e1c89),
    ],
    [
        c(1, 0x0f876ccdf6cd96c6, 0x863c4e8d2ff01def), c(0, 0x78adf777fbe99833, 0x2f8dac2626f07c96), c(-1, 0xe52eac9000e9ba8f, 0x3f31d5bad655ee6e),
        c(0, 0x0beb418719249973, 0xadd1955f92d8120f), c(-1, 0xf960db9ba2990d80, 0xa227390c12e5b96f), c(0, 0x041ebf8d4926aca2, 0x70c061ee17f9a154),
        c(-1, 0xfd415e0afecaaa27, 0x2770e80b8eb1f432), c(0, 0x01d589043be9e96c, 0x950608aa7fe9601f),
    ],
    [
        c(1, 0x11687a8ae14a3726, 0xd0ef3c1841680dc4), c(0, 0x77d9a26df98d3e9e, 0xee32471bd7f6e255), c(-1, 0xe5bb4218fde9222b, 0xf34a792b83246a45),
        c(0, 0x0b83d4ff8e157df6, 0x23975dbb63bc3b15), c(-1, 0xf9b0bfe70454a91e, 0x26baae9e7d839b6f), c(0, 0x03df454fb800fbfb, 0xf95cdc9c4b743600),
        c(-1, 0xfd74afb288c0485c, 0xf408680203c19627), c(0, 0x01ad887afdf7b771, 0x1ff9c849b7084a20),
    ],
    [
        c(1, 0x13463fa37014e0d9, 0x4add534c66998a64), c(0, 0x77099efa915522d7, 0xfa3d4354a6ce46d1), c(-1, 0xe6431be57fb736e3, 0xc76667e135186106),
        c(0, 0x0b21400b73624502, 0x558288a98d579082), c(-1, 0xf9fbdd64263877b7, 0xf0b3321f8fdfe867), c(0, 0x03a4668bad040a36, 0x9ce5eecb7a897627),
        c(-1, 0xfda3a24ffce1ee3f, 0x168c2fa150340349), c(0, 0x018969833d225967, 0x383c8a6a3c052aa0),
    ],
    [
        c(1, 0x1520cd1372fea884, 0xf7689c664b732536), c(0, 0x763dc8239ae0b505, 0x832792ff515c0086), c(-1, 0xe6c6725126a491eb, 0x9bf41b8b3b025422),
        c(0, 0x0ac33909bd96ffe5, 0xdeb2fb0aabc7c63c), c(-1, 0xfa428c4162288f15, 0x4ef31e9c7c211502), c(0, 0x036dbf674fb507d8, 0xe70921b4a3b85b3e),
        c(-1, 0xfdcea26fd2f3ab04, 0x30e12add40e3728c), c(0, 0x0168c04393da2d28, 0x2179372d41127335),
    ],
    [
        c(1, 0x16f8334644df885e, 0x619fd78edc888499), c(0, 0x7575faa452e4db01, 0x8249b0dd34690c7d), c(-1, 0xe7457a6424724d57, 0xdc00f244fe12100f),
        c(0, 0x0a697b9feeb81720, 0xc8e5f47aa06e5076), c(-1, 0xfa851d42213e5fcc, 0xf7afd010b024caec), c(0, 0x033af5a9783b1ff0, 0x60abdb098ece9de0),
        c(-1, 0xfdf610d6de5509b9, 0x36e897309d0600bc), c(0, 0x014b2dcda6a274c2, 0x1b859cc1e2147cd8),
    ],
    [
        c(1, 0x18cc821d6d3e2b3d, 0x438a368ce93d99b8), c(0, 0x74b214d3b5b61887, 0xfd5f918805439ef7), c(-1, 0xe7c0660fda3ea045, 0x9e87022f6c23c3ab),
        c(0, 0x0a13c8493281b689, 0x4b274030594f164e), c(-1, 0xfac3da74cf6fbaaa, 0x30a5aad53c122a7f), c(0, 0x030bb7afc8874751, 0x32457274998d3163),
        c(-1, 0xfe1a43eb6c80dc42, 0xcd6c1775d18ac55e), c(0, 0x01305e6dcf5d23cb, 0xb531e59673e99b36),
    ],
    [
        c(1, 0x1a9dc8f6df10380e, 0xb98f9c8f8ada2dc4), c(0, 0x73f1f68caa484b6e, 0x5c93880985c00cfa), c(-1, 0xe83764666d7bac88, 0xf301a9843722d9b2),
        c(0, 0x09c1e3f03a83e7f0, 0xcc06c77afaed2ceb), c(-1, 0xfaff07d54cf34595, 0xc4679ac22e3b628b), c(0, 0x02dfbb846dfd776d, 0xa01013f4c4ed2d63),
        c(-1, 0xfe3b88ef31493eea, 0x946adc0925a4a6a1), c(0, 0x01180837eb78a899, 0x29d29b24ffef3e1f),
    ],
    [
        c(1, 0x1c6c16b2db870187, 0xe1d8335fb27f9349), c(0, 0x73358117d74d5e85, 0xb51ca5a70aecee0e), c(-1, 0xe8aaa1cdcdea7279, 0x35cf6929b9adb6a2),
        c(0, 0x09739792b4dce352, 0x2dec2f2d8dc08eeb), c(-1, 0xfb36e3de2c6433ea, 0xf032481a737710a1), c(0, 0x02b6be0f6e614161, 0x42237e5389497eb8),
        c(-1, 0xfe5a2510ace137e7, 0x37aa95b1767fde56), c(0, 0x0101e9c804b81306, 0x2b172a548ee96632),
    ],
    [
        c(1, 0x1e3779b97f4a7c15, 0xf39cc0605cedc834), c(0, 0x727c9716ffb764c4, 0xb16e651c4ed3a1d3), c(-1, 0xe91a482e99a8aa66, 0x3ef1a195ee836661),
        c(0, 0x0928afed5ad109ad, 0xb34919cd214af505), c(-1, 0xfb6ba80ac04e58fe, 0x030d98658a03a6d9), c(0, 0x0290825ff6da6966, 0x40ff64f848cd793a),
        c(-1, 0xfe765659b4835f1e, 0x17d5e9bf8b8b9942), c(0, 0x00edc92f0d42437b, 0xc582d17c848dee9d),
    ],
    [
        c(1, 0x2000000000000000, 0x0000000000000000), c(0, 0x71c71c71c71c71b7, 0xb7d132282fa50c5c), c(-1, 0xe9867f1f40f7b791, 0xf588d09544755be1),
        c(0, 0x08e0fd2fb2901209, 0xa94c1109af9b01e4), c(-1, 0xfb9d894bb91e7f6e, 0x21437be38225d83d), c(0, 0x026cd10aa19e8f42, 0x7c8ad8f2ac615ebe),
        c(-1, 0xfe90547fed3f7038, 0x6ceef30863cb9b53), c(0, 0x00db7305266a3292, 0x433ef207622e0797),
    ],
    [
        c(1, 0x21c5b70d9f8239ee, 0xc19844640f5c4da8), c(0, 0x7114f643c15e86f1, 0x77c833c5a9fb3681), c(-1, 0xe9ef6c0bc14baac0, 0x346df5cac918351a),
        c(0, 0x089c52b6b9b6b005, 0xb94a9eee3f8d67b1), c(-1, 0xfbccb86fdbd75da8, 0xeef86761a49c1d7d), c(0, 0x024b779a11c499e3, 0x1e993bac57070da5),
        c(-1, 0xfea8519b51f83d31, 0xc80e7a3cb1fefbf0), c(0, 0x00cab99bf23e0247, 0x6f1cb667977db1bc),
    ],
    [
        c(1, 0x2388ac0059c27d3f, 0x1a083e344b955b10), c(0, 0x70660acbb391ec61, 0xdb8635325e71502a), c(-1, 0xea55325a4640d05e, 0x9447f841077763d1),
        c(0, 0x085a86cdc51170b6, 0x657ec5f1c5e1c740), c(-1, 0xfbf9628229093a17, 0x684a7fee6e3e2f3f), c(0, 0x022c480f9ff9de55, 0x5dbb48ce13d396ac),
        c(-1, 0xfebe7ac643f83e16, 0x251f51416c9d014b), c(0, 0x00bb744c4c158682, 0xe0b5781fa52907ff),
    ],
    [
        c(1, 0x2548eb9151e85333, 0x04014ee90f133d58), c(0, 0x6fba415bee70e2b2, 0x5d9f4d47ce0e18f5), c(-1, 0xeab7f38cf727d422, 0x4bdd1a6c673c76b1),
        c(0, 0x081b7274f642f954, 0xdcd04cb606a5eb27), c(-1, 0xfc23b11ea13f89a4, 0xe241b297ee91d936), c(0, 0x020f187220badd59, 0xd4978e032ddb434a),
        c(-1, 0xfed2f8aa23e45abf, 0xcb224fd4ee85931a), c(0, 0x00ad7edb7bf63b17, 0x353e870e8f521331),
    ],
    [
        c(1, 0x2706821902e9a21f, 0xe9841ea83ecfafc7), c(0, 0x6f11824bacc46122, 0x6651a140152cf460), c(-1, 0xeb17cf6130cc526a, 0xc4f7f98d410b3ad4),
        c(0, 0x07def12cb996d8d4, 0xbd4d756723f1ff5e), c(-1, 0xfc4bcabeaf7012d6, 0xbfb8f3f3f90a7ae6), c(0, 0x01f3c2690f62f3e2, 0x4e8d1e6ba7fba1f6),
        c(-1, 0xfee5effb033e02a0, 0x9228976eb044aeff), c(0, 0x00a0b8f4921c10dd, 0x0bd322c412c447bf),
    ],
    [
        c(1, 0x28c17b9337833e50, 0xeaf5f17768e02930), c(0, 0x6e6bb6e9620d1d1a, 0x377065d2633760c4), c(-1, 0xeb74e3ec64d43404, 0x515a87bbb0667add),
        c(0, 0x07a4e0c5cdce46e7, 0x52c0abd5e6e06cfb), c(-1, 0xfc71d2fe2223bec2, 0x168fb8c14b08cbc6), c(0, 0x01da22e2a2991c51, 0x8ea28bd4a0321f28),
        c(-1, 0xfef781e4a1cdb1fe, 0xab7b13f5a93af512), c(0, 0x009505b31886c26e, 0x5618c1bdc958e7b2),
    ],
    [
        c(1, 0x2a79e3a2cd2e5a88, 0x8ad8cd94a9adaee0), c(0, 0x6dc8c96de76c4493, 0x1f1297b56252682e), c(-1, 0xebcf4db6d27f8198, 0xd4207fa2cae50889),
        c(0, 0x076d2135655d1f6d, 0x5343d8980f060cf3), c(-1, 0xfc95ead98063319d, 0xa934ebc46bca4677), c(0, 0x01c219c37fc56722, 0xf830e5a033fd3e54),
        c(-1, 0xff07cc6a9b7e144a, 0xd7b0784ab767abbe), c(0, 0x008a4b3cb458a7ea, 0x64a5828429293f93),
    ],
    [
        c(1, 0x2c2fc595456a6cd2, 0x13e9e0702d4d3665), c(0, 0x6d28a4f076553ecf, 0xbc08af3c965e8c80), c(-1, 0xec2727d44793ad61, 0x7a7cdcd55151f852),
        c(0, 0x0737946cfc98b8f8, 0x8caac62ef13357fe), c(-1, 0xfcb830e66f53f019, 0x0f2d936f06fe2d36), c(0, 0x01ab899eed88fec3, 0x8b37b898ad9c1b0a),
        c(-1, 0xff16eabd6825c729, 0xeb717d86ee441d68), c(0, 0x00807267ab9ece97, 0xc8f8ac93b11496ff),
    ],
    [
        c(1, 0x2de32c66287415e1, 0xd1b126693da32970), c(0, 0x6c8b355b61f5f694, 0x5b588472bc222af4), c(-1, 0xec7c8bfb13c885a1, 0x553f07904e2aa8ac),
        c(0, 0x07041e358afcdd67, 0x2e1843de6f30360e), c(-1, 0xfcd8c186c867de4f, 0x13d04d95b15c65ab), c(0, 0x0196577689adbe2f, 0x40635a77ad6522dd),
        c(-1, 0xff24f585959bdb1a, 0xbb8ee80d6f0e3546), c(0, 0x0077666c90a2c228, 0x4381614556a9fd81),
    ],
    [
        c(1, 0x2f9422c23c47ded8, 0x37a0d6249a34fefc), c(0, 0x6bf067618185a48a, 0x21775be1314e9437), c(-1, 0xeccf929955104a21, 0x406163db064816b0),
        c(0, 0x06d2a40dbf12de51, 0x4f0e90460f6272c9), c(-1, 0xfcf7b716ed9c9aa3, 0xb6ca85dd4ae8a5c9), c(0, 0x01826a80a685de6a, 0xb3ac5624ffc6160f),
        c(-1, 0xff32032673ab5b49, 0xa965d81e849a1360), c(0, 0x006f14a1948b255b, 0xa1f966a986d85343),
    ],
    [
        c(1, 0x3142b30a929ab31b, 0x8021034d8b723361), c(0, 0x6b5828743ece4fd6, 0x3394c692a0135c3c), c(-1, 0xed2052e8bf81e95c, 0x9b0df6aef4808908),
        c(0, 0x06a30d0afcdaf423, 0xcb8c62df17cd03ef), c(-1, 0xfd152a17d92eac41, 0xc43ad11a4fcbd8f7), c(0, 0x016fabf48ef9045e, 0xb0308bcf38020729),
        c(-1, 0xff3e27f93fc04fd4, 0x401c073f5d51212d), c(0, 0x00676c3e39c5158d, 0xa3c168e451455e4a),
    ],
    [
        c(1, 0x32eee757704167b6, 0x39dcc3abfc978929), c(0, 0x6ac266ba3d4e66d5, 0x41c4dff3c1cdb30d), c(-1, 0xed6ee30100781f3b, 0x07e29fbb5be9afd7),
        c(0, 0x067541bcddfaf510, 0x073cf72a8bf38f6f), c(-1, 0xfd3131555807121a, 0x79be1a8f1e4ea2e3), c(0, 0x015e06dc081e6e48, 0x18b8a90b803de708),
        c(-1, 0xff497681ba674acf, 0x9127915f45632d77), c(0, 0x00605e264d12f7f9, 0xcb82b72ca1171751),
    ],
    [
        c(1, 0x3498c97b1054009a, 0x0c9de42a1da1ae9d), c(0, 0x6a2f11068f40b05b, 0x8efae56ceea8e376), c(-1, 0xedbb57e8d99774d0, 0xb3828f0fe951e8bc),
        c(0, 0x06492c12f98491b0, 0xb118af915172fee4), c(-1, 0xfd4be208d1c51628, 0xb3cd60e67715c827), c(0, 0x014d67e97bc8a13c, 0xb29e13c1bb1f1d5e),
        c(-1, 0xff53ff9cf20733b5, 0x0d65ca46fece1337), c(0, 0x0059dcbb3384799a, 0x25c124c4ad662479),
    ],
    [
        c(1, 0x3640630445305a1c, 0x9e77362f3d783e12), c(0, 0x699e16d06eb3dd4b, 0x7b550a53ed434b3c), c(-1, 0xee05c5a60dd6a791, 0x3c695500593a32d5),
        c(0, 0x061eb744befa5a3a, 0x66dac39b43a345a8), c(-1, 0xfd654ff8f6608ea1, 0xfc1b48f4d089e788), c(0, 0x013dbd52493e3264, 0xd14cf771c46e9ff7),
        c(-1, 0xff5dd2aaf3d8a47a, 0x45d7d0b5541cd42f), c(0, 0x0053dbb2bd23e2d6, 0x700ae4142f9e410d),
    ],
    [
        c(1, 0x37e5bd40f95a171b, 0xfd7b297448900227), c(0, 0x690f682b71a26363, 0x0f49b850562c2fd9), c(-1, 0xee4e3f4c38509742, 0xef56a5affa719b0c),
        c(0, 0x05f5cfbb356c2f88, 0x7412fe5872d8908e), c(-1, 0xfd7d8d969fc83488, 0x6fda5d982f75b65d), c(0, 0x012ef6acc8e4b35f, 0x9db7165ae7378088),
        c(-1, 0xff66fdb3fd62cac6, 0xb630590c25db7a61), c(0, 0x004e4ff2c8bb4ae4, 0xe7da47f49b55a22b),
    ],
    [
        c(1, 0x3988e1409212e7d0, 0x321914321a556474), c(0, 0x6882f5c030b0f7eb, 0xbbaea0c265658bdc), c(-1, 0xee94d70aa28d4fc2, 0x73dd3379b3f28650),
        c(0, 0x05ce62fc7424e3ce, 0x4ea95b87722288e4), c(-1, 0xfd94ac172d699bb3, 0xfcdddd55d52c60df), c(0, 0x012104d19d2fd0ac, 0x6f65a72849091978),
        c(-1, 0xff6f8d89b5293975, 0x18251765f7f29ca5), c(0, 0x00492f711d7e3eab, 0x9c5ef528f69bf1ab),
    ],
    [
        c(1, 0x3b29d7d635662726, 0x6c178a084a4571fe), c(0, 0x67f8b0c558dfb872, 0x3b993bb38a8e50c7), c(-1, 0xeed99e392e0abb67, 0x38529972d4f58e2b),
        c(0, 0x05a85f98ae84a6e5, 0x1434fdaa5f0bec9d), c(-1, 0xfdaabb8c9817b479, 0x68ac1f7b47ca1764), c(0, 0x0113d9bff6fccbda, 0xdc383b9e00e129af),
        c(-1, 0xff778de4e043d2f5, 0x8d6bddebd73b402c), c(0, 0x00447116f44722a1, 0x904e6a8c4e43808a),
    ],
    [
        c(1, 0x3cc8a99af5452fe7, 0x9c9bb0fa0d42cd96), c(0, 0x67708af921115dfe, 0xc57ebadd64b4ad24), c(-1, 0xef1ca5646317681d, 0xc14bdc672f02ab27),
        c(0, 0x0583b518b0553c0c, 0x00a6f9b971035988), c(-1, 0xfdbfcafb7629a8d8, 0x0ac6adec104c83c1), c(0, 0x010768847ddd09ca, 0x862f6bfe04511edf),
        c(-1, 0xff7f097ffbef5e73, 0x5a531bb15db4344a), c(0, 0x00400ca7bbfd24e3, 0x220930c1bc5e80a7),
    ],
    [
        c(1, 0x3e655eefe136710e, 0xb35bb53255903cc6), c(0, 0x66ea769b1cd61f5b, 0xd05aa77a42537f41), c(-1, 0xef5dfc58b585960c, 0x3ff735be70e3311e),
        c(0, 0x056053edab32d924, 0xdfe61a01eb2d1311), c(-1, 0xfdd3e86f21d2c0a0, 0xebdfb7bd658e4033), c(0, 0x00fba52295e44500, 0xdd56ad0c6477a29b),
        c(-1, 0xff860a2f156eedac, 0xdfa6ef031d40d6ae), c(0, 0x003bfaaab413e2ef, 0xc82edc88e794da65),
    ],
    [
        c(1, 0x4000000000000000, 0x0000000000000000), c(0, 0x6666666666666663, 0x34be2a71fd152134), c(-1, 0xef9db22d0e561e73, 0xf32ea9ca116b79cf),
        c(0, 0x053e2d62389a4cf0, 0x2f39b7fffc657d41), c(-1, 0xfde7210c2e84d1cb, 0x7d1dcd6bb2d98482), c(0, 0x00f0847fc483ad04, 0xbc749bcd144bc45e),
        c(-1, 0xff8c98f52f8d1b86, 0xc82c0fa35a7cee73), c(0, 0x00383457054a5a18, 0x023607e1afc7a865),
    ],
    [
        c(1, 0x419894c2329f02ec, 0x06e8db41d4b893b9), c(0, 0x65e44d8c1a2d4f7d, 0x0b14eda0786e3768), c(-1, 0xefdbd54ca835bfd5, 0xfb5d1cdbe9b53470),
        c(0, 0x051d338c76d49877, 0x56c3478889c49ec2), c(-1, 0xfdf981215594d55a, 0x218b7e551bd668f5), c(0, 0x00e5fc50fcf84798, 0xa57baf6da80522cf),
        c(-1, 0xff92be177b741f7e, 0x789bf5e5338f8cde), c(0, 0x0034b3820c2d501e, 0xcb02f02f747a34ee),
    ],
    [
        c(1, 0x432f24fb01c7a4e2, 0xff83804b06e49d48), c(0, 0x65641fae1ead1094, 0xc61cdcea5be1b0dc), c(-1, 0xf01873804b808c9a, 0x0f548c11453a925d),
        c(0, 0x04fd5941295a476d, 0xe4e04d3fe354430e), c(-1, 0xfe0b1436fe427639, 0x8c1a9fee5f06c2f0), c(0, 0x00dc0309a2f87e51, 0x6afd67e08d1aca0a),
        c(-1, 0xff98812ea2396ea6, 0xd4a2775e179cc3c6), c(0, 0x0031728f92af408e, 0x3dbccf4fc13f5abe),
    ],
    [
        c(1, 0x44c3b83e57153319, 0x0a78d7cbdc279515), c(0, 0x64e5d0da33e8c2d1, 0x062f9790b0a25846), c(-1, 0xf05399f6f5738983, 0x4b4ba8b20e2be2eb),
        c(0, 0x04de9207c76d35ce, 0xefd5213e7d400ee2), c(-1, 0xfe1be51d81a01d66, 0x6c6f14ef80cf28fd), c(0, 0x00d28fcc17b6a41c, 0x4ffa800ec9faabd7),
        c(-1, 0xff9de936553169f9, 0x78cae9a7aa19165e), c(0, 0x002e6c63be9f6d68, 0x1d6b09a4d7e6301e),
    ],
    [
        c(1, 0x465655f122ff6618, 0xb174bc3292ed999d), c(0, 0x6469558545d86e2c, 0x99767cd17b63d308), c(-1, 0xf08d554df5413dca, 0x63d6a76e47ef64fd),
        c(0, 0x04c0d20f6594dd41, 0xc5e8bf1f66d2c11b), c(-1, 0xfe2bfdfa479b6879, 0x207b693984e7ecba), c(0, 0x00c99a5baa145ea2, 0x32a134897e2c2367),
        c(-1, 0xffa2fc9b54c40db8, 0xbcfeed740eeb8c93), c(0, 0x002b9c56821c66d3, 0x0ca31ae526d318ab),
    ],
    [
        c(1, 0x47e7054af09893b1, 0x867800a90608a4dd), c(0, 0x63eea286fdbe58e3, 0x6d57084668e1c813), c(-1, 0xf0c5b19888e0a0cc, 0xe9e06f1d135d61a4),
        c(0, 0x04a40e246865b4bf, 0x045411cdcfd7b14b), c(-1, 0xfe3b6853d7822650, 0x6ed012e88d6e2776), c(0, 0x00c11b0fc719f262, 0x26cff4ff5710a31b),
        c(-1, 0xffa7c14817ecbdd6, 0x2b2c75fd3fab1449), c(0, 0x0028fe2861761d27, 0xbe4c794a501834c6),
    ],
    [
        c(1, 0x4975cd5768087ba3, 0x3850ff422de5ecd2), c(0, 0x6375ad158e802551, 0x04aaa71499f8e335), c(-1, 0xf0fcba6702a44562, 0xb60ff98bf8d46179),
        c(0, 0x04883ba6f08ce746, 0x31515ac7d18dd083), c(-1, 0xfe4a2d1cf3cb733b, 0x95ce3f53292f642d), c(0, 0x00b90ac84b7e6056, 0x8a53b8be6b42af62),
        c(-1, 0xffac3cb039b1c221, 0x4b6cad6cad6a110d), c(0, 0x00268df86773f02e, 0x4f44ad118b398d71),
    ],
    [
        c(1, 0x4b02b4f7c0a87823, 0x87824d408798242d), c(0, 0x62fe6ac1b86bcdca, 0x7e31044d34fc4e4b), c(-1, 0xf1327acd7feff120, 0xd958e655db41a4e4),
        c(0, 0x046d5081f1835548, 0x2f346f29598205cc), c(-1, 0xfe5854bed69e32db, 0x9d14efab5a01732e), c(0, 0x00b162e2da59982f, 0xaef10380aef6c7f0),
        c(-1, 0xffb073dacd9c46f4, 0xa354ea182a34f52f), c(0, 0x0024483b25ba7008, 0x34131d4b19c3ec0c),
    ],
    [
        c(1, 0x4c8dc2e42397fd6c, 0x5c1722145a8a2ca7), c(0, 0x6288d173011096ee, 0xe6c71aaf5a1800cc), c(-1, 0xf166fd6a38bb3ad7, 0xe7237cbd7f277cd9),
        c(0, 0x04534322e5919895, 0xa712ef73c850e5ab), c(-1, 0xfe65e722a27debab, 0xb1905b59e881565b), c(0, 0x00aa1d31200634df, 0x1bfcce5ac3341ac5),
        c(-1, 0xffb46b6bb87b8e40, 0x4926bf05ce4d54ef), c(0, 0x002229b2a3346e9c, 0x2a94514f995a5cc1),
    ],
    [
        c(1, 0x4e16fdacff936b88, 0x518b1fa94b93158e), c(0, 0x6214d7641c0f1884, 0x49769d71809c908e), c(-1, 0xf19a4c6b6ef6cad5, 0xc1eabaed4a22475a),
        c(0, 0x043a0a7212f644a1, 0x13cf3fe9e4fd0772), c(-1, 0xfe72ebba18ade3e3, 0xa52e8eaf06c378b0), c(0, 0x00a333efead00104, 0x762f03a5d1339424),
        c(-1, 0xffb827ac27740389, 0x6d7800f65e76d845), c(0, 0x00202f671e019084, 0xfc9bd2f289436ed7),
    ],
    [
        c(1, 0x4f9e6bbc4ecb3073, 0x969806124fc607d6), c(0, 0x61a2731f81f9f229, 0x5e088cc5de9caead), c(-1, 0xf1cc7195045e05a3, 0x255e001fcbbb93ef),
        c(0, 0x04219dcb570b1b8a, 0x7a89a70f9eaa746d), c(-1, 0xfe7f6987a5322118, 0x5b9eca8ec3b732ca), c(0, 0x009ca1bf055a0f87, 0xf05f167a82d39971),
        c(-1, 0xffbbac923c761c8d, 0x4fbf3bb729409208), c(0, 0x001e56a089948c0b, 0xfea1277513911d44),
    ],
    [
        c(1, 0x51241356cf6e04df, 0x70983a2f0b43a2a8), c(0, 0x61319b7c32930851, 0x668a4e3a6d767f55), c(-1, 0xf1fd7645bcbf0895, 0x306420ee96c2841d),
        c(0, 0x0409f4f76d384d9b, 0xfed1e95ac7bb7877), c(-1, 0xfe8b6725ced921f5, 0xec4f61910c48c74c), c(0, 0x00966199c0b36c8e, 0xc7500150815a7eec),
        c(-1, 0xffbefdc804ac6583, 0x69c04067dd51822a), c(0, 0x001c9ce0b46cc701, 0x176d6556b09e5801),
    ],
    [
        c(1, 0x52a7fa9d2f8e9b78, 0xe753f30fe1bd106b), c(0, 0x60c2479a9fdf9a21, 0x2c80f06d4cfceea2), c(-1, 0xf22d637c324dd0b6, 0xfa4d1cef62bd8c79),
        c(0, 0x03f30825a860a4b3, 0xc1c95a8bd88ee6f5), c(-1, 0xfe96eace1863081f, 0x2f8607665c840077), c(0, 0x00906ed01de40c72, 0x6c487d7285533b13),
        c(-1, 0xffc21eb1cb309a99, 0x7b647846fc531659), c(0, 0x001affde033fcfde, 0x5fad7951ebacd786),
    ],
    [
        c(1, 0x542a278d2d035ada, 0x8f6eb6ac8301b52b), c(0, 0x60546ee1bfb87457, 0xcc07a5f6a3fbd2ad), c(-1, 0xf25c41db812c276a, 0x2e3263e3c7c3ca4b),
        c(0, 0x03dccfe61638ff93, 0x7f14f2149534d3fc), c(-1, 0xfea1fa5f5ea7351a, 0xc9ad37fe9248a63d), c(0, 0x008ac500885b6f45, 0xf9c9b9d2e5cd084f),
        c(-1, 0xffc51273d85b904f, 0x8f9001b2d9c206d6), c(0, 0x00197d7eb18315eb, 0x05f74a53e97c5a12),
    ],
    [
        c(1, 0x55aaa002a9d59fe4, 0x0afb89dbe06ca9cb), c(0, 0x5fe808fc41a34355, 0x44903056d69e1a5f), c(-1, 0xf28a19afaeed9da5, 0xaf873fba5d1b422e),
        c(0, 0x03c7452404b2c297, 0xd992a11beacc2cc5), c(-1, 0xfeac9b63be845c79, 0x7d9e27ed317b0df8), c(0, 0x00856012141d5c6d, 0xeb2d76917310a3ce),
        c(-1, 0xffc7dbf7ac428453, 0x341730cf35de624a), c(0, 0x001813d4891f6fb6, 0xaf87535a0b200ea7),
    ],
    [
        c(1, 0x572969b8b5cd84c3, 0x2fc714cc4b7f0af5), c(0, 0x5f7d0dd5e6e6d292, 0xaf15531cc606dcb0), c(-1, 0xf2b6f2f1d284a6f9, 0x188c4e0b0e1309bb),
        c(0, 0x03b26120e245b426, 0x00537b18560e28d5), c(-1, 0xfeb6d3160c6d723e, 0xe2975bc0411112b2), c(0, 0x00803c2f33d4533d, 0xcb37167527759e3d),
        c(-1, 0xffca7df0c166f6d1, 0xe7944f2aecdd28b7), c(0, 0x0016c11904b72d56, 0x0ecadd0739423adc),
    ],
    [
        c(1, 0x58a68a4a8d9f3541, 0xe6399c04b6432edb), c(0, 0x5f137598faee2057, 0xbee74ae99d03e63f), c(-1, 0xf2e2d54c00b30d10, 0x6a49e4be721b7b52),
        c(0, 0x039e1d6f727bb9b2, 0x221e50518372eeed), c(-1, 0xfec0a666e684bb7e, 0x0086e762c065707e), c(0, 0x007b55c0dc196053, 0x038c9ce38fa7f284),
        c(-1, 0xffccfae0e33e0bbf, 0x567560882c714d42), c(0, 0x001583a9d1542cd0, 0xdddc4a3eb11ac787),
    ],
    [
        c(1, 0x5a2207349037688b, 0xf2719b69fb6b6473), c(0, 0x5eab38abea2dc971, 0xde62ffad2f420d91), c(-1, 0xf30dc81d00cbd25a, 0x561f7f770ed90dc4),
        c(0, 0x038a73ef50a98920, 0x68e86436e286fdc7), c(-1, 0xfeca1a01696b09d3, 0x8016b8f269567441), c(0, 0x0076a96a0a49f227, 0xe8e7740daeba6362),
        c(-1, 0xffcf551c22fc299a, 0x27d8417222a6bff4), c(0, 0x00145a05a5942b45, 0xd108a518fb09f6c2),
    ],
    [
        c(1, 0x5b9be5d52a9da213, 0x19a3675eeeef9bbc), c(0, 0x5e444faef5dca570, 0xba00b476bf9ef1ed), c(-1, 0xf337d27bcd4e961a, 0x7d6b7ee7494dd3e5),
        c(0, 0x03775ec8bb3becf2, 0x1ad5d3f02bb8c0cd), c(-1, 0xfed3324f8f3185a7, 0xa3cef452faca3572), c(0, 0x00723403a6318d01, 0x66a34e0f8259cd6d),
        c(-1, 0xffd18ecc73fc4ae2, 0x376b087ae422ec12), c(0, 0x001342c96583fa2c, 0x631f27c9e5123a50),
    ],
    [
        c(1, 0x5d142b6dbadc55bc, 0x7d54c8f4456fbada), c(0, 0x5ddeb37a02eba72f, 0xa9fbc5c2b175350f), c(-1, 0xf360fb3ae3a41bbb, 0xbb30fc8594c866dd),
        c(0, 0x0364d868a272d91c, 0x4a18613d1e4a9a2d), c(-1, 0xfedbf37e3f36558e, 0x77cfbc739807adf9), c(0, 0x006df298b6a1f5df, 0x9bf110ed7a45d667),
        c(-1, 0xffd3a9f4f82410c3, 0x1cd8c4768eade582), c(0, 0x00123cad8b53319e, 0x8beeb5a9131c16e1),
    ],
    [
        c(1, 0x5e8add236a58ef08, 0x39c1f97009cf630a), c(0, 0x5d7a5d1a82c261df, 0x3df03d4bf08c6a55), c(-1, 0xf38948eb66083df7, 0xe59fe9df215076ac),
        c(0, 0x0352db7cf5cb4cbc, 0xc3945545fa54ab4e), c(-1, 0xfee46181151e1b61, 0x12aa464761940053), c(0, 0x0069e262e1d34e4d, 0xa4f354d81533cf8e),
        c(-1, 0xffd5a87503ca704c, 0xed198476906fa67a), c(0, 0x00114683cde5a419, 0x16929c806adfcc91),
    ],
    [
        c(1, 0x6000000000000000, 0x0000000000000000), c(0, 0x5d1745d1745d1745, 0x0c95f6f140398398), c(-1, 0xf3b0c1e01276e388, 0x65d26596a00751da),
        c(0, 0x034162f12bb7c900, 0xd52a419dca8ea61b), c(-1, 0xfeec8015e4940d9b, 0x4d8a7c5ddffb4c4d), c(0, 0x006600c733110e55, 0x16662032f70e1f0c),
        c(-1, 0xffd78c0adfe39d78, 0x351b35cbac8f92a0), c(0, 0x00105f34ff09e40c, 0xcc3e11acc73b5bd9),
    ],
    [
        c(1, 0x617398f2aaa47c93, 0x1a88bb3f196bfab4), c(0, 0x5cb567117c7f1415, 0x13149232a3dbf902), c(-1, 0xf3d76c30113f1851, 0x11a5bad0b7730c95),
        c(0, 0x033069eaff9dd602, 0x0d63b52212f6f974), c(-1, 0xfef452c7fefef61d, 0x09e1745e20ab99b3), c(0, 0x00624b531fd2ed01, 0x7217871603056843),
        c(-1, 0xffd956565086d3af, 0x6f240542461e3e72), c(0, 0x000f85bf1bc7c34a, 0x19d2a22577525f3a),
    ],
    [
        c(1, 0x62e5acd0c3ebdb4e, 0xbc77db77f19a95fc), c(0, 0x5c54ba7d13c07ba7, 0x938366a9348216eb), c(-1, 0xf3fd4db99db0dea2, 0x5cf1ed08e4435660),
        c(0, 0x031febc7625e63fe, 0x34752b70e192ae0f), c(-1, 0xfefbdcf33fe94f7a, 0xe1ac99f4933f2907), c(0, 0x005ebfb9c6eb7a47, 0x8c06deb02f4d034f),
        c(-1, 0xffdb08dae54756d8, 0x4285bab49e4d6eb6), c(0, 0x000eb93389d19925, 0x4ecb251aa7683844),
    ],
    [
        c(1, 0x645640568c1c3745, 0xde1f93225c0898ba), c(0, 0x5bf539e4c9519aa6, 0x08fe095042927bda), c(-1, 0xf4226c248b2f4c2b, 0x09c72e63728551b8),
        c(0, 0x030fe41799f77fad, 0x9424a332c3d69a02), c(-1, 0xff0321c6e474f3a7, 0x7b19534b92eae244), c(0, 0x005b5bd164f31707, 0x0000c68fef46b4ae),
        c(-1, 0xffdca502184f5b0a, 0x660dfc7f26a90e93), c(0, 0x000df8b57da9b421, 0x6ce2c79e891fa1ea),
    ],
    [
        c(1, 0x65c55827df1d1b1b, 0x7083f07874293a41), c(0, 0x5b96df45995f83dd, 0x761feee206de43ee), c(-1, 0xf446cce4a8c8c916, 0xe7820d300bd84e0f),
        c(0, 0x03004e9e8d1067e1, 0x818747e08020e50c), c(-1, 0xff0a244831d64d39, 0x51df298af80cf087), c(0, 0x00581d90f98690ee, 0xcf1392c4baa8d9e3),
        c(-1, 0xffde2c1d40af8886, 0x76e91f7a17a8bee7), c(0, 0x000d43788584bdfd, 0xff07d620135f48cc),
    ],
    [
        c(1, 0x6732f8d0e2f76d84, 0x00571f7ba3a3bad6), c(0, 0x5b39a4c756163431, 0x35bb68a4b97fab41), c(-1, 0xf46a753c05528838, 0x3b5541a232787ba7),
        c(0, 0x02f1274e377e25e7, 0xc3e9542fe297e3a8), c(-1, 0xff10e754ee7ed6dc, 0x4acd460caba0e796), c(0, 0x0055030e19563d66, 0xa7cec30a4170e32e),
        c(-1, 0xffdf9f675be6e3bf, 0xe0f41fb47f9d040d), c(0, 0x000c98bf355bd7f0, 0xd6e9becd05473848),
    ],
    [
        c(1, 0x689f26c6b01d07a0, 0x5be74a840c7eeef0), c(0, 0x5add84bb224bd99a, 0xc4763ee72c8e6b8d), c(-1, 0xf48d6a3d15e24dca, 0xcc21ebc408975a9d),
        c(0, 0x02e26a454506d888, 0x037a91055f5f0368), c(-1, 0xff176da5b1521a15, 0x4c4ee448fdeff262), c(0, 0x00520a7ae95e27d0, 0xa3c0e922155ca951),
        c(-1, 0xffe10006b243880f, 0x1bdd5cadb2271868), c(0, 0x000bf7d9f0ff6844, 0xf2c0046ae7cc73ba),
    ],
];

/// `1 / sqrt(1 + z)` for `z` in `[0, 1)`.
#[rustfmt::skip]
pub(crate) static RSQRT_POLY8_LUT64: [[Scalar192; 9]; 64] = [
    [
        c(1, 0x0000000000000000, 0x0000000000000000), c(-1, 0x8000000000000005, 0x8dc307992c45c0bc), c(0, 0x5fffffffffffc446, 0xc92fc30c3471bd68),
        c(-1, 0xb000000000bdbe57, 0x8c4c77ffd598793a), c(0, 0x45fffffeee77bff3, 0x8163a4ae42c6b632), c(-1, 0xc10000d304254744, 0x24d2667b872ada33),
        c(0, 0x39bfa2e2cd9c8f8b, 0xc4cc48f8a3112737), c(-1, 0xca779a0fbfd06934, 0x6554fb2d7c016fb1), c(0, 0x2f0fd7c0bef0fa12, 0x3991067e421e251c),
    ],
    [
        c(0, 0xfe05ec45078ec98a, 0xdb190ec3addaef15), c(-1, 0x82f144ca52ece7a0, 0xee35f28b0f544ed5), c(0, 0x5c59a5d0fdd6c2d8, 0x883d394b30409f0b),
        c(-1, 0xb439b99629cc27fc, 0xf7b22e4d487c865c), c(0, 0x41485c2afffe998a, 0x73eaebbaa00cbb6f), c(-1, 0xc62647d89edf57e9, 0x2c299e4e1fd81bf9),
        c(0, 0x343668ccd23d07f9, 0x7069910fc9938893), c(-1, 0xd057618d0a70be3f, 0x2ad3c9bfb01ce712), c(0, 0x294af358e19a214b, 0xfe887d50f346267e),
    ],
    [
        c(0, 0xfc176441607cd51b, 0x342fe0afde0e16de), c(-1, 0x85c61cf7932852df, 0xb11b982546024b01), c(0, 0x58e44806209cae56, 0xc74cff3f993fcc62),
        c(-1, 0xb82b15f5e1076ab2, 0x09fa2f4877d866de), c(0, 0x3cf2b70f8c380125, 0x588d37bcab7e6b32), c(-1, 0xcacf1661023b7679, 0xabb801f79b26b1ae),
        c(0, 0x2f47a705c6923f6b, 0x4770702face5c9f0), c(-1, 0xd57edff6f9a10b2a, 0xacc8c7f27b1d4b22), c(0, 0x244d80996617d8a8, 0x7d3603b9595cc3c7),
    ],
    [
        c(0, 0xfa33f940a5865ff9, 0x8ebd37ef86d44cf2), c(-1, 0x88800339012ea080, 0xf349b181ce763d1b), c(0, 0x559ca5cf84e243de, 0xf4653b22dd7238a0),
        c(-1, 0xbbd9e98b35e807c5, 0x8993fdb21b432543), c(0, 0x38f5cdfd94748932, 0xf5009c3214e18dc2), c(-1, 0xcf0800bb52ee92a8, 0x5f311408f0527d54),
        c(0, 0x2ae08f31f9dc365b, 0xef1f58e59b214396), c(-1, 0xda06f6281376bee3, 0x44c6c13ddef876e4), c(0, 0x1ffa2673a6702f77, 0xee548ca4775e8582),
    ],
    [
        c(0, 0xf85b42469578e146, 0x62c4cc8a64441ba6), c(-1, 0x8b205948322177e2, 0x02f9c43ff017f142), c(0, 0x527fc0fa36f74d71, 0xe0dd98f584326116),
        c(-1, 0xbf4b7cb93eb8120e, 0x4e3591a7e3439e77), c(0, 0x35495d0c7da36701, 0x709dd4959dd7a9f0), c(-1, 0xd2dcf6ea75bce81c, 0xfebbfe07bd12c26e),
        c(0, 0x26f0d8bbd32b7691, 0x7f70c8c0d280cc8a), c(-1, 0xde04dc2338447c11, 0x5d7734727469729d), c(0, 0x1c3835cc7751ec3e, 0xa3b374ac2afceffb),
    ],
    [
        c(0, 0xf68cdbaf3c4ab96b, 0x3c9a36c0f918532c), c(-1, 0x8da869e2ac62e917, 0x7d9e3bbcb73a6f92), c(0, 0x4f8ad7bb5b8e8e67, 0x256f71f15580bd30),
        c(-1, 0xc2849acbf002cdd0, 0xbc48a76b78eab482), c(0, 0x31e60082c5de14c0, 0xc0783a43191243bd), c(-1, 0xd6587ca34d7d7544, 0xfb19477fe2ac632d),
        c(0, 0x236a626e1fb611cf, 0xb8b4f89af3f55ecc), c(-1, 0xe18ab5e6ff6495e7, 0x0f12273e2b1caf09), c(0, 0x18f2de14c7ec723b, 0x168aa9a41824f189),
    ],
    [
        c(0, 0xf4c866d6aaf69113, 0x8251cdbc810efee7), c(-1, 0x90196a968d462416, 0xb90a2922945fbc92), c(0, 0x4cbb5f23bc6216c3, 0xfaa9591e327027f4),
        c(-1, 0xc5899f21b9ee40a8, 0x28a64f341a89cc75), c(0, 0x2ec51a4af61d708f, 0x6428da15e862d3d6), c(-1, 0xd983d929a716c4b3, 0x7330e2f6091b139d),
        c(0, 0x2040e2f5cf8f83a5, 0x2ab6b8c34e398c54), c(-1, 0xe4a80ee8e135bc0b, 0xebbd1f7c613efb09), c(0, 0x161886cd0eab8dc6, 0x0b70726c78b4370c),
    ],
    [
        c(0, 0xf30d89c78c56dc29, 0x3169a1a70a1ab384), c(-1, 0x92747d65294fd678, 0x88952be7973b5af7), c(0, 0x4a0efe27c739b655, 0x651fd2ba5e20525b),
        c(-1, 0xc85e80c8e19c6b5c, 0x7bc04ad02bec8b92), c(0, 0x2be0badf5af9594e, 0xba9bdf91ab8c97aa), c(-1, 0xdc67405246b55749, 0x2a3e94dd894bb4eb),
        c(0, 0x1d69a5c543cf65bb, 0x37649f3de14f6a2a), c(-1, 0xe76a40d14cdf9bf9, 0x0ac94d33ca02a30e), c(0, 0x139a46d9cb8969a9, 0xe4262e90b45a7437),
    ],
    [
        c(0, 0xf15beeeff7d330b0, 0x77520cef470e537f), c(-1, 0x94bab24003a22341, 0x9ec62fd808b8369d), c(0, 0x4783892aa83e7f84, 0x5a58aabe82c9a1be),
        c(-1, 0xcb06dcc3f56567bc, 0x39aea0c5fa7f2e85), c(0, 0x29338d2e5920ed00, 0x2a9eb5ffd500f487), c(-1, 0xdf09f5b9a25efbbc, 0x50df90b437732248),
        c(0, 0x1adb5247ce37b487, 0x1aa3dafcac836c0a), c(-1, 0xe9dcc92f79d06b92, 0x75474cce6a291937), c(0, 0x116b740032e68ad3, 0xa77c29d37155f854),
    ],
    [
        c(0, 0xefb344dbf31a7d80, 0xb72ceb0abe9a5938), c(-1, 0x96ed0863f7a03935, 0xe4b020eb0ca43044), c(0, 0x4516fdfd6430e1ae, 0xfa32b0e32622b094),
        c(-1, 0xcd85ff2177e447d8, 0x7b08d363c532a3d7), c(0, 0x26b8c50c97d62c11, 0xe2df6202be444aa5), c(-1, 0xe1726b11c5c37816, 0xe109177d6345bb6e),
        c(0, 0x188dbbb23b1ea6e5, 0xed194554ad2e19c8), c(-1, 0xec0991275b614c8b, 0xe3907f01b7335d65), c(0, 0x0f814604413c1f85, 0x37932cd4817e1adf),
    ],
    [
        c(0, 0xee133df522aa45ec, 0x5c6c63b7b2ae4e2d), c(-1, 0x990c6f95fed8f686, 0x71a2dd792c382644), c(0, 0x42c78044c27a207d, 0xf712622c0ba4eb9c),
        c(-1, 0xcfdeeb0cb6e84668, 0xabf62cdff734b00f), c(0, 0x246c0fda6e88fadf, 0x0ac0ad7b959219ac), c(-1, 0xe3a65a44c34b225a, 0xee942e3377bce840),
        c(0, 0x1679b809b0470ed4, 0x624adb90d4b87b4b), c(-1, 0xedf9298bd14b2504, 0x555296f510fa48d1), c(0, 0x0dd289c693f0e7c1, 0x132d7ee1db01e885),
    ],
    [
        c(0, 0xec7b904735c16a41, 0xad934b6f2f5130d2), c(-1, 0x9b19c9449a8ec19a, 0x207cb93c0caa0d3d), c(0, 0x4093563a7e5ce75f, 0x82afd29f041e4803),
        c(-1, 0xd21461f889dcf9a3, 0x8611e31057e832fc), c(0, 0x2249870f929bfbd7, 0x88ae330f626a7034), c(-1, 0xe5aadc0a7854b093, 0x2444ca5f8da972b6),
        c(0, 0x1498fd38605e0ba4, 0x0faf2c744a9df93c), c(-1, 0xefb2fd63689f138c, 0xc27a25a1e6c41e30), c(0, 0x0c576175e34e2842, 0x3eadfb3f71b4334d),
    ],
    [
        c(0, 0xeaebf548a5c9b634, 0x881ad0784dec39c4), c(-1, 0x9d15e99091c60420, 0xdf74664eedc4e367), c(0, 0x3e78e5bfa3eeae3b, 0xcf66414a54af7c9d),
        c(-1, 0xd428ea0040c14db6, 0x7fe4d219fc5fa114), c(0, 0x204da46b64814da5, 0xedc668d6aa72b961), c(-1, 0xe7847b7713742936, 0xf8d2be4d1ffc0f0d),
        c(0, 0x12e6033a576daf0c, 0xd89d51dae0e9b02a), c(-1, 0xf13d7c78d248bdc5, 0x48bd3558c365729f), c(0, 0x0b090f7839ab599b, 0xc2a46b822611b25a),
    ],
    [
        c(0, 0xe96429a76b6c313c, 0xe5052a0414faae50), c(-1, 0x9f01983f68f79bbf, 0xc4325531da095f20), c(0, 0x3c76b1b7399426c6, 0x35a574fdc3db507e),
        c(-1, 0xd61ed39741877d25, 0x316cb1291762dd7b), c(0, 0x1e753791cf42b480, 0xaa6508fc3cece06f), c(-1, 0xe93746f2c4694b18, 0x7e8927e5241707c1),
        c(0, 0x115bea963120182a, 0xbd2318149369159f), c(-1, 0xf29e3f4cfb2239c2, 0x0532ad6ba031f2f7), c(0, 0x09e1ca23064662cf, 0xf5d85095514cbc51),
    ],
    [
        c(0, 0xe7e3ed1954909705, 0x8490176f36da6731), c(-1, 0xa0dd9199b5ec10d0, 0xa54b5ec3530363d6), c(0, 0x3a8b57a168a9c50a, 0xd57d00221df8751e),
        c(-1, 0xd7f83e9c935a6f8e, 0xea04e00de2f95b31), c(0, 0x1cbd5ce4c161057d, 0x7e2d88a57573e613), c(-1, 0xeac6def97f240990, 0x0c7090ff9be831bc),
        c(0, 0x0ff66677a2987fd7, 0x75c726f3b856af69), c(-1, 0xf3da2583cab0a6bd, 0x1bf644425514d8fe), c(0, 0x08dc96b5249ded98, 0x2379d0e08a693a03),
    ],
    [
        c(0, 0xe66b022fae9abd30, 0x831d53bef1d249f4), c(-1, 0xa2aa873737a76598, 0xdb6f772c41826b4d), c(0, 0x38b58d7045e18cb9, 0x3e3540f1ddd002a4),
        c(-1, 0xd9b71ee4cfd81c2d, 0x10d8704f097a8603), c(0, 0x1b23757119eb16b0, 0xc5a4c5c09fd7b20b), c(-1, 0xec3682f3243c0c57, 0xbda2e804e45b1fff),
        c(0, 0x0eb1a9ddd02a738b, 0x3f786dd94581f859), c(-1, 0xf4f56fb31ae15681, 0x503cf350d7153a93), c(0, 0x07f52a4fb8a78cb0, 0xe98f2da52de01eca),
    ],
    [
        c(0, 0xe4f92e2dff6ec9ab, 0x294a33804a57d35d), c(-1, 0xa46920ba66a07c22, 0x9c6f4733b69997b8), c(0, 0x36f41f9028d2e174, 0xb4cbaa8a014c6f82),
        c(-1, 0xdb5d404a8f8a7850, 0x06774da9a261bdd7), c(0, 0x19a51fcbad871777, 0x0a6f5874d336f5be), c(-1, 0xed891c682ecca854, 0x0bf324a58c40ca1c),
        c(0, 0x0d8a57668c9f3afe, 0x224f383780401e72), c(-1, 0xf5f3d55338a157e1, 0xfd712e6ebabf25c6), c(0, 0x0727cfe61ae2d488, 0x2a8ff26cfabd99a6),
    ],
    [
        c(0, 0xe38e38e38e38e38e, 0x38e38e38e38e38e4), c(-1, 0xa619fc7d03dce227, 0x3aa2050db7fbd391), c(0, 0x3545ef1e3699867c, 0xcd4d949be11c7134),
        c(-1, 0xdcec4a53597ef4ce, 0xd23773c11b12450d), c(0, 0x184031bff075d1a1, 0x29f2e97cf7308ca2), c(-1, 0xeec148cccf1c6ca4, 0x2e7ab05fc8a4cdef),
        c(0, 0x0c7d7352c4665102, 0x7a633adadad9e60c), c(-1, 0xf6d8976f5f2f4fec, 0xb659b7f8f8678cca), c(0, 0x0671524cf1d59113, 0x1d71f1671299a148),
    ],
    [
        c(0, 0xe229ec8782bd0dff, 0x077d1628a1d7a6c1), c(-1, 0xa7bdb02f052cdb52, 0x15a6ba8620f42c2e), c(0, 0x33a9f04860df79dd, 0x8dc3826d1202902e),
        c(-1, 0xde65c37558ffde57, 0x6129082283021fa6), c(0, 0x16f2b2b600590333, 0xa4f7c3904a16db86), c(-1, 0xefe16213c3d80d89, 0x52ae1b3d64db8fa9),
        c(0, 0x0b88577036310666, 0x3db7d215a352198e), c(-1, 0xf7a69099b9019a6e, 0x16c40bd3a946d7ae), c(0, 0x05cee9b753a5915a, 0x9b872edc63376b4c),
    ],
    [
        c(0, 0xe0cc15976723d8dd, 0x612e73d1f66cff47), c(-1, 0xa954c969190199e2, 0xa4de17763d0f931e), c(0, 0x321f28d2a46e1714, 0xe2b26fc2893ae842),
        c(-1, 0xdfcb14089560ace2, 0x6b15624575701bff), c(0, 0x15bad6b958979dbd, 0xc9b1e5887a4960f4), c(-1, 0xf0eb863309c36415, 0xe91a49e3113c0811),
        c(0, 0x0aa8a8a1cb4a56f4, 0x429b90fc40ba8c27), c(-1, 0xf86042905d7d41d5, 0x0557e07ad370f335), c(0, 0x053e2c103722149b, 0x411094c190daea8d),
    ],
    [
        c(0, 0xdf7482b7dce1c57c, 0x33d03c1f48702ebd), c(-1, 0xaadfce33dc9dcd26, 0x71b7439cc391b84d), c(0, 0x30a4aebdcb138630, 0xdb5df2196ded9636),
        c(-1, 0xe11d88ed1577fc72, 0x188a0ce4eb347a46), c(0, 0x1496fa0c876b9e1f, 0x7a8fc8fdfbbebea4), c(-1, 0xf1e19dbe612fcb89, 0x5f30bb46bfbe84c1),
        c(0, 0x09dc4dcadef80e4a, 0xa39a313e842bdfdd), c(-1, 0xf907e1ee9955c6b6, 0x69e67b2402681341), c(0, 0x04bcffb80a5bec1d, 0xf9579edb22db3f93),
    ],
    [
        c(0, 0xde2304975988c25a, 0x496c8381b0cc9066), c(-1, 0xac5f3d84c32fe705, 0x8b2948d1728b2b4e), c(0, 0x2f39a70c5e939d96, 0x07de88f4cd723126),
        c(-1, 0xe25e55ee3323d4ff, 0x67cbb90eeeef22ac), c(0, 0x13859d38d49fce60, 0x6aa908826419f13c), c(-1, 0xf2c561b6813ab7be, 0x7efe16b34adb9cb8),
        c(0, 0x092167eaf0d5a1fe, 0xa5ff7aca226c7435), c(-1, 0xf99f6036d53887c4, 0xb5039a1248b6d236), c(0, 0x044990431bea771b, 0x1832049198c0893b),
    ],
    [
        c(0, 0xdcd76dd2c41a3a48, 0x1ff884116bd07de8), c(-1, 0xadd38fb1934f8b0f, 0x2da9b84413e3c6e3), c(0, 0x2ddd44a2d774556a, 0x7c305b589a206e0e),
        c(-1, 0xe38e97ea6499d296, 0xafc757975a714811), c(0, 0x1285618b0708e6b8, 0xb6fb6d4e19599d48), c(-1, 0xf39860a7733586ab, 0x86ad56acb54d59ef),
        c(0, 0x08764b3eeb6635cf, 0xa7aee769e5399851), c(-1, 0xfa2874750cf1f2a9, 0x1632f61a06629c44), c(0, 0x03e244e68d03ddae, 0xf1793e55853ce554),
    ],
    [
        c(0, 0xdb9192dbced88938, 0x4e999a2ca0219b20), c(-1, 0xaf3d36db49fcdc3d, 0xfc6978ed8c71cd10), c(0, 0x2c8ec740646ba682, 0x8193415611c171b5),
        c(-1, 0xe4af56c5e3d436e6, 0x20f1d4ec53bfebd4), c(0, 0x119505f06144cc58, 0x4a76cc60006c9949), c(-1, 0xf45c032cdbe37216, 0x85d2ec1048e61f1b),
        c(0, 0x07d97943983446d2, 0xc183f324aef2d165), c(-1, 0xfaa4a2af8734fec4, 0x267898bcc33cd1c4), c(0, 0x0385b84f782231e0, 0x1af65ed5e1f5edec),
    ],
    [
        c(0, 0xda5149e0ecaa7db0, 0x0e7b8bf47e099bec), c(-1, 0xb09c9f511e4da3c0, 0x41016fa22ade717e), c(0, 0x2b4d7a8def788c75, 0x1ff0720587c6d46d),
        c(-1, 0xe5c1872ddb823f75, 0xa946e7f33dbbacb9), c(0, 0x10b36428955f09b8, 0xf192f6068a1640ef), c(-1, 0xf5118fefd1557a90, 0x26a53769ea62791b),
        c(0, 0x07499b7a43d9d423, 0x5587dc98b434fc78), c(-1, 0xfb154252f97e9665, 0x27daf9963aafbec0), c(0, 0x0332b1ab6f3712b3, 0x88e926624a8a1c43),
    ],
    [
        c(0, 0xd9166ab6c3ebed37, 0xf5b60a5cefeb4331), c(-1, 0xb1f22fec4f211ae3, 0x7f41e657bf57d447), c(0, 0x2a18b5414580d4f5, 0x614f730ca54e4019),
        c(-1, 0xe6c60c31188a515a, 0xaecc604a52ba9da1), c(0, 0x0fdf6e42dbcf219a, 0x808fd26da80d55ea), c(-1, 0xf5ba2f2f2c91d5d2, 0x9b163b7793e2acb3),
        c(0, 0x06c57ed522a1d73d, 0x255fa2de764ba7e8), c(-1, 0xfb7b83c02cb190f7, 0xd3b458e5c1a7b5b9), c(0, 0x02e81eb2e5099639, 0x85bd062d7f986ca9),
    ],
    [
        c(0, 0xd7e0cec3030b4922, 0x49b0f34d3a75549c), c(-1, 0xb33e4a6554404105, 0x18eef31857857e85), c(0, 0x28efd8527dbb96ab, 0x7677630193e9305f),
        c(-1, 0xe7bdb8b2ac0a3089, 0x31e60dbcdc8005f7), c(0, 0x0f182c5d956cd1b8, 0x918748262c9c132e), c(-1, 0xf656ede0fb28482f, 0x7b8059b4fa732ce6),
        c(0, 0x064c0fb4de9ddf26, 0xdeaa68ded1b48dbe), c(-1, 0xfbd8751b4d5d67b3, 0x433bf775f267110f), c(0, 0x02a50e8ddf727824, 0xe1a6e064c5fda89d),
    ],
    [
        c(0, 0xd6b050e87d9c9fb9, 0x51ac51179785c47d), c(-1, 0xb4814ba2fe06d046, 0x10d7481d08736f1f), c(0, 0x27d24e41f029689b, 0x6df1813b43e5c2d3),
        c(-1, 0xe8a950ba68f51e8d, 0x0566b363f5df75d1), c(0, 0x0e5cbaa0f0a9e722, 0x81dc312d4999bb9c), c(-1, 0xf6e8c079beb6f452, 0xcc2b59e29f677f2b),
        c(0, 0x05dc5663f81fc2eb, 0xecd75d89a0ec1fb5), c(-1, 0xfc2d06782184f93a, 0x73300abc9d2ad70f), c(0, 0x0268ad71c145d45b, 0x13b8e798c378d178),
    ],
    [
        c(0, 0xd584cd747a9ccdb6, 0x6b08e129bad8b876), c(-1, 0xb5bb8c0401dfb872, 0xd14800bb6ae555dd), c(0, 0x26bf8a6d36aca8f5, 0x35db651cb27c5248),
        c(-1, 0xe9898aa6b7846158, 0x61c31c2918e213f0), c(0, 0x0dac476df6bd165f, 0x848fe236b8a3a34d), c(-1, 0xf77085647a24fed9, 0x6b08dca3d2bd5562),
        c(0, 0x057573ff6262a38c, 0xba2b371f24e98710), c(-1, 0xfc7a0d7a3a2e81b9, 0x3b3287e21e4771da), c(0, 0x023240dc517c21e4, 0x9042de100d15cd14),
    ],
    [
        c(0, 0xd45e220d1e8160c2, 0x1932d99359357569), c(-1, 0xb6ed5fa3665d1e04, 0xf2362a4e62af6411), c(0, 0x25b70871dbaee67f, 0x74024f7051eb5225),
        c(-1, 0xea5f1042d58965f7, 0x336505bc337beca0), c(0, 0x0d0611bc329a4a24, 0xfceec794cced080c), c(-1, 0xf7ef07351b0ad56d, 0x9afb1b4578ba4d10),
        c(0, 0x05169fbe1c63707d, 0xa6903e34e5eef374), c(-1, 0xfcc0487cbddb03b0, 0x5364fc8cb90da6ed), c(0, 0x02012454945373eb, 0xa06e4b2849c75bf8),
    ],
    [
        c(0, 0xd33c2da0dd67baa1, 0x1a307c0a6051de01), c(-1, 0xb81716983759f6ef, 0x6e74bb569acfec3d), c(0, 0x24b84b9c7c3efd99, 0x9f4797809512b591),
        c(-1, 0xeb2a7fc44382df03, 0x0cae596df196fea1), c(0, 0x0c6967a0d5ff7085, 0x3ccddf9be321140e), c(-1, 0xf864fe9d90365a9b, 0x369e85fdcacb0061),
        c(0, 0x04bf248b8289ebf5, 0x4a0f92b795043ab1), c(-1, 0xfd0061527d5c99e7, 0x4e585f6ccc8db291), c(0, 0x01d4c69dbbe16a35, 0x8d01eb56cb05c82d),
    ],
    [
        c(0, 0xd21ed056e344c6cf, 0x7cf4a80daa25bb63), c(-1, 0xb938fd30e141c26c, 0x18544d25426f92cb), c(0, 0x23c2de6342bbbcab, 0xd1530193c6489ae4),
        c(-1, 0xebec6cb1d1922a3f, 0xe4e55147ba36a707), c(0, 0x0bd5a4fadc3cef63, 0x9bce2ef961a47de6), c(-1, 0xf8d3142cccbd1846, 0x7f2f9dcd0692e81c),
        c(0, 0x046e5ee9c700e492, 0x8f08e5d30b87cf0b), c(-1, 0xfd3aefac8ea57a59, 0x871c5059123aa752), c(0, 0x01aca74b896d853b, 0x5ad61f324372c178),
    ],
    [
        c(0, 0xd105eb806161efe0, 0x21660d76bc38eda3), c(-1, 0xba535c2a8a34b00a, 0xbe6755ab3d789309), c(0, 0x22d651eabae5a6ae, 0xc2d12f3b8a0727e6),
        c(-1, 0xeca560b67bbd6b99, 0x9a7e05d7f038acef), c(0, 0x0b4a324031e4d13b, 0xf58621cd491a71a8), c(-1, 0xf939e1de0b20a53a, 0x96109bda3cc97ee9),
        c(0, 0x0423bb1370499fe7, 0x16e0b9dee1c6451c), c(-1, 0xfd707b3395874613, 0x81ae1a5aa8c10847), c(0, 0x018854aa0b449d9c, 0x5fb8edc7b53b0090),
    ],
    [
        c(0, 0xcff1618ab1bf70ec, 0x7c1a167450ac7fff), c(-1, 0xbb6678e4b82a6943, 0x3f9568bddc061d98), c(0, 0x21f23d9418fd7b8f, 0x860e98e2c655db58),
        c(-1, 0xed55dc620925aa47, 0xe22923dfb47f07c1), c(0, 0x0ac683685eea26e5, 0xda66046e60233786), c(-1, 0xf999f47dd82ded2d, 0x92b90a115f95685f),
        c(0, 0x03deb353f991b2b3, 0x1944de5feba7e4a7), c(-1, 0xfda17d5e20ce83a1, 0x6a13a5a9097440f7), c(0, 0x016769ecc9e52e3d, 0x17bbcc1b157ed2a3),
    ],
    [
        c(0, 0xcee115f24222bc04, 0xf88f78cd18556c24), c(-1, 0xbc7295918c5d25df, 0x210e147190ced55f), c(0, 0x21163e9423bd7971, 0xf6566f41c7ddbd80),
        c(-1, 0xedfe57d92cff894b, 0xe703b8a596544f63), c(0, 0x0a4a16f19844d56f, 0x11a41faa365eb733), c(-1, 0xf9f3cce9bcd436f5, 0xa520a11c4e4bebaf),
        c(0, 0x039ece90bedcc8b1, 0x143897147c19870c), c(-1, 0xfdce630d05550701, 0xa7b2239bbcf7e4bb), c(0, 0x01498d9b45bab9b5, 0x85f6f76acbb708f1),
    ],
    [
        c(0, 0xcdd4ed3639ac3ebe, 0x8376c2b684e3b583), c(-1, 0xbd77f162d615e68c, 0x34fc8ec36d3ec2c4), c(0, 0x2041f79204ce9702, 0x0101146772006143),
        c(-1, 0xee9f4376b953ff62, 0xb7d7a0d169cb570a), c(0, 0x09d474fd78e170e1, 0x35b22cc5c3e4452f), c(-1, 0xfa47e12ec5475c4d, 0x2c4948cd6bb24416),
        c(0, 0x03639efc4717d33a, 0x5ff1829254296592), c(-1, 0xfdf78df55d7c3aa7, 0xd81e3538256716e8), c(0, 0x012e70322b275841, 0x99161693d6141d40),
    ],
    [
        c(0, 0xcccccccccccccccc, 0xcccccccccccccccd), c(-1, 0xbe76c8b439581062, 0x62cebbe81eda1642), c(0, 0x1f75104d551d67e4, 0xf3776a42bebc3615),
        c(-1, 0xef39085f4a153f62, 0xc767c055d29734b1), c(0, 0x09652e82f134d487, 0xb5a9b9f08fe0c5fb), c(-1, 0xfa969d8a9f04b488, 0x095e0e9bd3fcf2b5),
        c(0, 0x032cc0eec5774e26, 0x729aaa5ce754963e), c(-1, 0xfe1d55dec0ca428c, 0x045d5209c7a42ac6), c(0, 0x0115caf1e9b57198, 0x96a34d315d48c8c3),
    ],
    [
        c(0, 0xcbc89b18345a9f00, 0x0460dc0b4c7f192c), c(-1, 0xbf6f5532a0d69d77, 0x32a985bb1d8fec4b), c(0, 0x1eaf354aca5fb45c, 0xe15c2de533c1f702),
        c(-1, 0xefcc0908aa449a67, 0x387321065affed2c), c(0, 0x08fbdc9342ae5741, 0x82cd5229852a7d5b), c(-1, 0xfae0655293eeba80, 0x18f6fcf58bfa99cc),
        c(0, 0x02f9d9df56f91e26, 0xf6999cd82d76fc18), c(-1, 0xfe4009bb5d7a2f85, 0x6c5cceeccde5e2e2), c(0, 0x00ff5ed46f2ca2d6, 0x3b69872f09b6b0d5),
    ],
    [
        c(0, 0xcac83f5c3d5a212f, 0x0ec0f12004533583), c(-1, 0xc061ce012e01d778, 0xd58e27544029d0a6), c(0, 0x1df01786f9688acf, 0xd8f96a7ba7f3ddfc),
        c(-1, 0xf058a1b614300c94, 0x3daba090d31b0944), c(0, 0x08981fb019bbeeea, 0xd5aaa6a0f7cbfee1), c(-1, 0xfb2593c3443f3216, 0xe731c3a06540ad88),
        c(0, 0x02ca977a14a189a5, 0xe865e65d4907f0f6), c(-1, 0xfe5ff09ed64cdd28, 0x8806838065282d14), c(0, 0x00eaf3a4b0596b6f, 0x096486368b0d3ed0),
    ],
    [
        c(0, 0xc9cba1b467d185a7, 0x2bc9d81b40b7a9ae), c(-1, 0xc14e67dbd5cdd181, 0x8fee78ba9a9da949), c(0, 0x1d376c2eadc2e0ce, 0x7e466703a899b931),
        c(-1, 0xf0df28ea50b39386, 0x11a7f617067a0a88), c(0, 0x08399f310f36e624, 0xf43f037d0bc2dd13), c(-1, 0xfb667cbba97c188e, 0xed458a1a1c5ccb1a),
        c(0, 0x029eaecf928b41d8, 0xe744bfdeecc73721), c(-1, 0xfe7d4a981c777f7b, 0x4613b3178fc22838), c(0, 0x00d857336e994c77, 0xb7af0cbd9426123a),
    ],
    [
        c(0, 0xc8d2ab0a8bb0dc5d, 0xf70cc29546b9999c), c(-1, 0xc2355537d504a880, 0xaec5beb0c0834934), c(0, 0x1c84ec5c629b62da, 0x2bbec3e6a03fb923),
        c(-1, 0xf15fefd09f7dbb7b, 0xa9712fd6ce9882d8), c(0, 0x07e008b709cd7d7f, 0x4de006a643b06746), c(-1, 0xfba36d65a0275218, 0xfa326029d960fc1e),
        c(0, 0x0275db9ad21450e2, 0xbfcfbeb5d53610b8), c(-1, 0xfe985171ebb6d673, 0xaafa53131d917812), c(0, 0x00c75ca550758614, 0xc3296b047f5ed612),
    ],
    [
        c(0, 0xc7dd450dfb7cb1cb, 0x4aa5cac3abe802f7), c(-1, 0xc316c662238239f7, 0xbbf67e8d96aea4b2), c(0, 0x1bd854da736cb1be, 0xb9d832368f30934e),
        c(-1, 0xf1db429d3b38448d, 0x92ac72506ed8cf16), c(0, 0x078b0fac2224f031, 0xbc8382d8c4cc4b08), c(-1, 0xfbdcaccdf30b16a0, 0x514d25b8012ddd85),
        c(0, 0x024fdf9b0cd1ef99, 0x629f2fbf9d8705d4), c(-1, 0xfeb1395d11939163, 0x17ec2749923149d0), c(0, 0x00b7dbd6f19407d8, 0xca77fa168d40245c),
    ],
    [
        c(0, 0xc6eb5a2b1d004aa6, 0x2ba9a89be1bff46b), c(-1, 0xc3f2e99c0a90d150, 0x4c31bf9606bd8723), c(0, 0x1b3165e9a445aa5e, 0x7802d8d294fc1c8e),
        c(-1, 0xf25168e637d1ae04, 0x366fddee364731fe), c(0, 0x073a6cced1b30865, 0x8792e5527ed123b9), c(-1, 0xfc127c6da883ee9f, 0x945b865d081cf7d6),
        c(0, 0x022c81ff10a016bc, 0x7d556f55e62a61ce), c(-1, 0xfec831873da0291f, 0x680936e92001b401), c(0, 0x00a9b0d40708b1bb, 0xbd34830feffe0a4b),
    ],
    [
        c(0, 0xc5fcd58370d79b98, 0xd7088de8643e4a46), c(-1, 0xc4c9eb35ffbf84e7, 0xdde553baf1c2ba9f), c(0, 0x1a8fe30ba9fb6dc8, 0x82da8e0dae177bc8),
        c(-1, 0xf2c2a5f566b19c37, 0x011fad26ad82daea), c(0, 0x06edddc7554a018d, 0x71b625f7cfb30e49), c(-1, 0xfc4518a61ee1b3da, 0xe3a0a8fd903d872d),
        c(0, 0x020b8ee02ce23c39, 0x477b11ea3fa8ccea), c(-1, 0xfedd64a0bc4493c9, 0x6e5f127f3d2f535b), c(0, 0x009cbb5f1beebfc8, 0x8ca7152d0d80d62e),
    ],
    [
        c(0, 0xc511a2e602212de1, 0x65fabedca76e5359), c(-1, 0xc59bf5a8e2ecb009, 0x1b52e5759ecc2daa), c(0, 0x19f392d162417872, 0x941be716f6e25503),
        c(-1, 0xf32f3913dc203ac4, 0x46f014cdd1ffdf5c), c(0, 0x06a524c6498bb075, 0xa7d46d2ffd4f14ad), c(-1, 0xfc74b93157f8575f, 0x333faa0b23fd8521),
        c(0, 0x01ecd6caef67e205, 0x0ec22df75e51b30b), c(-1, 0xfef0f9532e4d643a, 0x4e513b82846553b0), c(0, 0x0090de87c1f4a097, 0xf10699f1b396f31f),
    ],
    [
        c(0, 0xc429aec8381e310b, 0xee1e047f960fe714), c(-1, 0xc66931adbbdaf3f3, 0x23ac8d6e9f5363a1), c(0, 0x195c3eac728f2372, 0xdb82504c97f09a88),
        c(-1, 0xf3975dcfa25f9abf, 0xeae5db46afa2776c), c(0, 0x0660082ba166ecca, 0x015bd4b7e332b4fd), c(-1, 0xfca19187ac6dd894, 0x4cd24fe7f51ff1e1),
        c(0, 0x01d02e5425ae8c64, 0xf8e5317055504866), c(-1, 0xff0312ab0b07d2d1, 0x35af9879640ee0f2), c(0, 0x0086004d5c808e1d, 0xee7a43a061d6eb37),
    ],
    [
        c(0, 0xc344e63f03f3e455, 0xde999d21ed40048f), c(-1, 0xc731c6541177e2cf, 0xc7c2e8494c78f03b), c(0, 0x18c9b2c40afee27c, 0xf672ffdb3a876e35),
        c(-1, 0xf3fb4c3c19b419ba, 0x619318848278b3f0), c(0, 0x061e52352dc9f983, 0xfb78edd22d1bbb59), c(-1, 0xfccbd13bfc8875e0, 0x12bc1a983e7d0137),
        c(0, 0x01b56db8c687cc94, 0xd10dde2889c86e29), c(-1, 0xff13d0757fa2f117, 0xfd394026ff674f58), c(0, 0x007c094ced3e7d08, 0xf538942cf9211c1a),
    ],
    [
        c(0, 0xc26336f8652610a5, 0xbb275697aa3e0f5f), c(-1, 0xc7f5d916f2fbf1f9, 0xc406d611e69df41b), c(0, 0x183bbdcc9001c08c, 0x0bd450b5e95f9d19),
        c(-1, 0xf45b392d78b28e08, 0x97963660e8bfcbaa), c(0, 0x05dfd0b4022f0099, 0xed19933fa81592bb), c(-1, 0xfcf3a44f559af1bb, 0x596c0b01ed7268a5),
        c(0, 0x019c708791707b9d, 0x5833774df057ecd2), c(-1, 0xff234f940b7e68e9, 0x74e1364b5ecb3060), c(0, 0x0072e4787fe48b9d, 0x68dfa4e886d65967),
    ],
    [
        c(0, 0xc1848f353fbf3445, 0x16791d2da5909bab), c(-1, 0xc8b58df0c93715a3, 0x25554a0f287e1b60), c(0, 0x17b230e1f2e86423, 0xb89cdf9f5cc455ea),
        c(-1, 0xf4b7566fd579ea03, 0x4c81bd16645f3fd7), c(0, 0x05a454c813e227e4, 0x1114136b7dcd2a2e), c(-1, 0xfd19337ce82630b4, 0xe0106c66f8d08e60),
        c(0, 0x0185155354f646c0, 0x6e09b701964805fb), c(-1, 0xff31aa470cdb8c5c, 0x870c1e0b73172ae8), c(0, 0x006a7ed7022b69e0, 0xe3fd5bfa4eede44f),
    ],
    [
        c(0, 0xc0a8ddc37f70e8b2, 0x287513a367a65904), c(-1, 0xc971076e04b07357, 0xc4c64aa6af123860), c(0, 0x172cdf6485eff2f9, 0xad64421635c23892),
        c(-1, 0xf50fd2fa16e06eac, 0x86e575cef52feee7), c(0, 0x056bb2a1821f0c2d, 0xf5fe4ede6de9cfa4), c(-1, 0xfd3ca47f12eaefcb, 0xbcb1d569ba801957),
        c(0, 0x016f3d6ced14dfb7, 0x54c3101ce06de33d), c(-1, 0xff3ef8704b1521e0, 0x0955d98fda5bd2d6), c(0, 0x0062c74b7d85f176, 0x1f55ab037b7a8298),
    ],
    [
        c(0, 0xbfd011f8834686ac, 0xefb5a2ba51149538), c(-1, 0xca2866bebbb64ef7, 0xe6b7cba1b8b2dfe7), c(0, 0x16ab9ed81cc0b612, 0xf16ffdff16201f3b),
        c(-1, 0xf564db1d23f48022, 0x413720246703b435), c(0, 0x0535c14703a0cb4a, 0xdeca9408a11e6161), c(-1, 0xfd5e1a4e320ee03c, 0x891cd7f790ffa675),
        c(0, 0x015acca42615dac4, 0xf6382ae15a757d0e), c(-1, 0xff4b4fce6a415c03, 0x992722bfe8a98590), c(0, 0x005bae62cb0973a8, 0x5d48f27649b82ad5),
    ],
    [
        c(0, 0xbefa1babcdcda527, 0x9dedae1432eb6eb9), c(-1, 0xcadbcbc74a1276c6, 0x400c3d9f6225e808), c(0, 0x162e46c54e29442c, 0x1d6c59a9fc8893b1),
        c(-1, 0xf5b698afa064550f, 0xb72f5afce9cc32d6), c(0, 0x05025a6103301b22, 0x831390b15ac8b904), c(-1, 0xfd7db559cece7001, 0x781bf18145050f8b),
        c(0, 0x0147a90ec8b96522, 0x8c63ffee479e4908), c(-1, 0xff56c432173b3dae, 0x0353f01dc55b1816), c(0, 0x00552626f80b622d, 0xcac89969197b2c3e),
    ],
    [
        c(0, 0xbe26eb31f5dc40b1, 0x9980e3520c486079), c(-1, 0xcb8b553002cc1176, 0xc0531804e8b0e1c4), c(0, 0x15b4b09caf64efba, 0xc606bd0cb34327a8),
        c(-1, 0xf60533367d56b175, 0xc3270307f0a83b2b), c(0, 0x04d15a09004bbb1d, 0x97c385bc88507def), c(-1, 0xfd9b93bcbbabc252, 0xf52e2b26ef636ca1),
        c(0, 0x0135bad529b4192c, 0x9463aa1e2840e716), c(-1, 0xff6167ada1eb3196, 0x248be896098cd6ec), c(0, 0x004f21f7abec7e68, 0x0eb4840b0e2a9523),
    ],
    [
        c(0, 0xbd567157d45b92e5, 0xb6f19016f6ee29d1), c(-1, 0xcc372074032f28c7, 0xc136008bbd4ed716), c(0, 0x153eb79be46fef11, 0xf29576424c6bf50a),
        c(-1, 0xf650d00a9fe4f2cb, 0x86bbd48949215f1a), c(0, 0x04a29e9cd360ca45, 0x393fb150018abbd6), c(-1, 0xfdb7d16c9a61941a, 0xe6bafe9ba7f3f660),
        c(0, 0x0124ec03a9413907, 0x6b10abab94e7afd2), c(-1, 0xff6b4abfa5be2548, 0xc42e30ca0ea6814d), c(0, 0x00499666f5f5e56f, 0xf35f8a3c84045bf2),
    ],
    [
        c(0, 0xbc889f5debb94ae3, 0x4efd81d40819d24c), c(-1, 0xccdf49ef353a39cb, 0x0d55d005961ee46e), c(0, 0x14cc38b463d6f552, 0xe3a0d1a07d1c24bb),
        c(-1, 0xf699927bd8a98d67, 0x6e8a44199cd48b8c), c(0, 0x047608957e4d5402, 0x74466a3f0b9b5515), c(-1, 0xfdd288653bdc4202, 0x777bdffc599a1792),
        c(0, 0x011528609ffd12a1, 0xa4bfcc4135b391af), c(-1, 0xff747c794d1e504d, 0xef0042f76680f81d), c(0, 0x00447919fd9252da, 0x9e12f46a0e6b37c1),
    ],
    [
        c(0, 0xbbbd66f405d74e61, 0x11ed0f926e7ca0ba), c(-1, 0xcd83eceb8e90522f, 0x0e490abc7e081602), c(0, 0x145d1273cf19af5a, 0x40b1f460e8ad6dc0),
        c(-1, 0xf6df9bf162a56e6f, 0xabe5dbaaadfaac34), c(0, 0x044b7a613a369dd0, 0xb5022501d37ae03b), c(-1, 0xfdebd0d03ee98581, 0x732a1aea02637a91),
        c(0, 0x01065d4644ba5b92, 0x9ab23564f9906003), c(-1, 0xff7d0aa0ac10609d, 0x2949da221286b5e4), c(0, 0x003fc0ad1ffba5e8, 0x6b333eefe51640c0),
    ],
    [
        c(0, 0xbaf4ba350584c3c0, 0x1ecdda5de31945e3), c(-1, 0xce2523ad9820dcdd, 0xd96419c30e35f93e), c(0, 0x13f124edc3260de5, 0x77849f7ec4d4175e),
        c(-1, 0xf7230c081b0c07a4, 0x4964940e5760832f), c(0, 0x0422d8407b31a1c0, 0xe918817c9dff6c7c), c(-1, 0xfe03c1294804cacf, 0xc74e8ab672529897),
        c(0, 0x00f8798023ce38bd, 0xd36ffb892f3b11d5), c(-1, 0xff8501cf9f802b66, 0xb312086dd8d1561d), c(0, 0x003b649b150792c1, 0x7c2627af5f7cca4a),
    ],
    [
        c(0, 0xba2e8ba2e8ba2e8b, 0xa2e8ba2e8ba2e8ba), c(-1, 0xcec3078049db74bf, 0x94aba45eea3f31da), c(0, 0x138851a706ab0ee5, 0x966e05a0f89c03f6),
        c(-1, 0xf76400ae9f4439cb, 0x06bdd5d1916698ee), c(0, 0x03fc0825a8eeadd3, 0xb4b112e235615113), c(-1, 0xfe1a6e5f237bc89a, 0xeff86c67bd066bdf),
        c(0, 0x00eb6d2bcb983e75, 0x52437fb025a675c6), c(-1, 0xff8c6d8f920202e0, 0xd00fd900632fe9c2), c(0, 0x00375d26c1662556, 0xc2c2ac176002ba87),
    ],
    [
        c(0, 0xb96ace22f8fe282b, 0x98694d3e7a736624), c(-1, 0xcf5db0c044fc4965, 0xe39d301b02089115), c(0, 0x13227b81fe09da98, 0x29b86d263eb48892),
        c(-1, 0xf7a2963f7a906716, 0x172e8cc6d85ec171), c(0, 0x03d6f197519e8895, 0xe5a30c0b0a934a0b), c(-1, 0xfe2febf21afb9cfd, 0x82fbeb3f69a398db),
        c(0, 0x00df299c5c059b79, 0x767561fded8bcb7f), c(-1, 0xff9358727b9c26fe, 0xceb8a84026164217), c(0, 0x0033a34767a55c13, 0xb91bb3c54672f24d),
    ],
    [
        c(0, 0xb8a974fa2780f750, 0x835d9593be3b9f36), c(-1, 0xcff536e676c36414, 0xb0e9ca49efaaee33), c(0, 0x12bf86ac4e880ac5, 0x608e060025c13888),
        c(-1, 0xf7dee799894f773a, 0x0d1ee87cbb1611e5), c(0, 0x03b37d94a1b27b39, 0xb6b8d48b68ef3dbc), c(-1, 0xfe444c0fc04ca42d, 0xa2847304a8d79665),
        c(0, 0x00d3a140afa22f18, 0xb10fa5e0a6528f22), c(-1, 0xff99cc296859a408, 0xa07ea16846a17c6e), c(0, 0x00303096f2e0ca9f, 0xde3f8619a0aafe8b),
    ],
    [
        c(0, 0xb7ea73c992a3354d, 0x59debf8d9adb2589), c(-1, 0xd089b0922cbd1b88, 0xf3ce969a214777fd), c(0, 0x125f588d9c19e4b5, 0xc670c1230547fc0f),
        c(-1, 0xf8190e36b49a63c8, 0x69b6d70c209ce3b9), c(0, 0x0391967beff9cb0e, 0x6806dc5294449929), c(-1, 0xfe579fac6880a5db, 0x7535ef16645bffa3),
        c(0, 0x00c8c78bdc9b7ac0, 0xa3a7ed1efcae235c), c(-1, 0xff9fd198c8c7cc46, 0x13d38b5e27eca370), c(0, 0x002cff421e5cabe5, 0x8664086e4ff0f717),
    ],
    [
        c(0, 0xb72dbe8b32bf07bc, 0x210829336eaca917), c(-1, 0xd11b3392a3231073, 0xb05b3a0dfa1e6117), c(0, 0x1201d7b74eaadadb, 0x1474dac8e23f0b07),
        c(-1, 0xf8512241261dd730, 0x8d6bb21bda28b9d1), c(0, 0x037127f332052cf4, 0x9264e90b56dec6e9), c(-1, 0xfe69f69a8d051ddf, 0x24101c9e147c9ff1),
        c(0, 0x00be90dfd3078692, 0x168bc6ae72ee2ca6), c(-1, 0xffa570eac7e9fc10, 0x09e2b1bd3c2457e0), c(0, 0x002a09fa4493b3cb, 0x1584323b1358e2fa),
    ],
    [
        c(0, 0xb673498eac2c6863, 0x8e65244f0e0a0581), c(-1, 0xd1a9d4f0154a0e1f, 0x9d2d1db2a42f56ee), c(0, 0x11a6ebd54d391f17, 0x94e99f8067f7369d),
        c(-1, 0xf8873aa7116e3b1d, 0x55ef7023a456c930), c(0, 0x03521ed230b09829, 0x9470b78b3b69ce91), c(-1, 0xfe7b5fa042d651e0, 0x105abec70fc9b04d),
        c(0, 0x00b4f279e3e84098, 0xf0f235f524eb0b26), c(-1, 0xffaab19fdb827e73, 0x61d89663579dbd11), c(0, 0x00274be8a69ae469, 0x679b7e18499a209b),
    ],
    [
        c(0, 0xb5bb09764497b336, 0x9b29f9346f1db2de), c(-1, 0xd235a8f45789257d, 0x560cde79016aa013), c(0, 0x114e7d9f9e6964a2, 0xf45b54f941efcb51),
        c(-1, 0xf8bb6d2d2dafbf96, 0x4a3c96ceac5f60bb), c(0, 0x0334690e58491e62, 0xbd228ed52bac2393), c(-1, 0xfe8be88af3660351, 0xbacc3122a67852fa),
        c(0, 0x00abe26101da6fe1, 0x2471846792f5fc94), c(-1, 0xffaf9a9dbdadc1d1, 0x5e7355cde9fb8c37), c(0, 0x0024c0a3024e1881, 0x485a260bf04a82f9),
    ],
];

/// `log2(1 + z)` for `z` in `[0, 1)`.
#[rustfmt::skip]
pub(crate) static LOG2_POLY6_LUT64: [[Scalar192; 7]; 64] = [
    [
        c(0, 0x0000000000000000, 0x0000000000000000), c(1, 0x71547652b82b2a06, 0x55df31d6691f4f42), c(-1, 0x4755c4d6c09d74a9, 0x6814c0ec423f261a),
        c(0, 0x7b1c273de8a642b3, 0xac735208c47deed5), c(-1, 0xa3ab09e5ed708eae, 0x172b28bde27fbab6), c(0, 0x49ce9f2d87d8d7f7, 0xd83123285a482e3a),
        c(-1, 0xc53f71616fd015d9, 0x76aa17eb52ba2f78),
    ],
    [
        c(0, 0x05b9e5a170b48a62, 0x9b89f8846042be52), c(1, 0x6ba5ded75ac09232, 0x209deb9c3a08eef5), c(-1, 0x4cf92be4d965625c, 0x29ebe89843327efb),
        c(0, 0x7583d34150505abb, 0xff59467bb0f9be99), c(-1, 0xa93863dc2868c21b, 0x25e2d49af6f1c2e5), c(0, 0x444da53c3bd978b6, 0xef7ada8781195ad4),
        c(-1, 0xca6db69a25d6b820, 0xed27e07b57e34062),
    ],
    [
        c(0, 0x0b5d69bac77ec398, 0x9b03784b5be08490), c(1, 0x66235b77002a9f2b, 0xbc235fdfe0137ba6), c(-1, 0x525b7690171719be, 0x694a38afe0d4c2c6),
        c(0, 0x7040fe2ebf6162e5, 0x582551ee16cdf83f), c(-1, 0xae5c7e2a6ab4d6c9, 0x6014b42f15ae1ed4), c(0, 0x3f48e21c53211646, 0xc62e63a04dbbd2a6),
        c(-1, 0xcf158788f85a7c6b, 0x0d94d512fff3c548),
    ],
    [
        c(0, 0x10eb389fa29f9ab3, 0xcf74bab999217067), c(1, 0x60caf2ef7e413b76, 0xc02a3f46b75d0bc8), c(-1, 0x578080823be99c9a, 0x8c53b3bd140d99dc),
        c(0, 0x6b4d5f0dc4001e18, 0x44d5c880ad166c3a), c(-1, 0xb3208fe79039e1e1, 0x2bc1fc339872c4b6), c(0, 0x3ab3bef0c87bbbeb, 0x1f887f610c8fb626),
        c(-1, 0xd3463edf4de7761a, 0x248d8f214392b718),
    ],
    [
        c(0, 0x1663f6fac913167c, 0xcc53826144575ac4), c(1, 0x5b9ac9b743edbc1e, 0x23e4e1c6377ee304), c(-1, 0x5c6bdd4f7a63bd62, 0xfde3d17477f195a1),
        c(0, 0x66a338c5d31f8dc6, 0x725aa1589fa5a379), c(-1, 0xb78ce2aa680337bc, 0x02d41b2a7d6f91bd), c(0, 0x368314ccca530de0, 0x21cc0e8ba7392176),
        c(-1, 0xd70d45787bd22a5a, 0x15c567ab907317e7),
    ],
    [
        c(0, 0x1bc84240adabba63, 0xb2c5a6e5197ab879), c(1, 0x56911fd600299da4, 0x712f17c4fbf3d4fa), c(-1, 0x6120deaf5ed8a802, 0xd56e8dd5ff20f8a5),
        c(0, 0x623d4c2284fb6cec, 0x90c0d3d68e1a0ead), c(-1, 0xbba8ed799b9811c3, 0xd4fff8615a032122), c(0, 0x32acfe1d8bc2d543, 0xc5d7b61b4003026c),
        c(-1, 0xda76576e868e85ff, 0x38dbe5041753a627),
    ],
    [
        c(0, 0x2118b119b4f3c72c, 0x4f78dfa14aa5157b), c(1, 0x51ac4eec8b21eeed, 0x3ec305bc34d61d4b), c(-1, 0x65a29a17954555e4, 0xc9b16f7221f35262),
        c(0, 0x5e16cb6b0b8613dd, 0x3659a51760f9ca88), c(-1, 0xbf7b6c580958f8b6, 0x592f59c31f9d63e5), c(0, 0x2f28ae8a7638b8cd, 0xfbf9968695e4ec12),
        c(-1, 0xdd8bbec8a5212f49, 0x376c9fdd343863cb),
    ],
    [
        c(0, 0x2655d3c4f15c343e, 0xa3e580eb4e974c9b), c(1, 0x4ceac86768b91812, 0x4e1fa6efe024a243), c(-1, 0x69f3edca3c7d6668, 0xa86b52e4e674e056),
        c(0, 0x5a2b4f5a7ff7e8e0, 0x5791d5b59e6379c3), c(-1, 0xc30a74e529b1136b, 0xacea71698380d136), c(0, 0x2bee5052c515ef98, 0xdd4eb8e868ed503c),
        c(-1, 0xe0568572cca5de2f, 0xb9760720a32300ca),
    ],
    [
        c(0, 0x2b803473f7ad0f3f, 0x401624140d175ba2), c(1, 0x484b13d7c0287b51, 0x0bf7e4d784dad9ec), c(-1, 0x6e1785674577dce3, 0x4e6e65d34b94b33b),
        c(0, 0x5676cd4d8aff101d, 0xd8de1270d8a8141a), c(-1, 0xc65b887733c8d71b, 0x41d6d790b5c5f71e), c(0, 0x28f6e657e5c89157, 0xcf9973d36cdf9280),
        c(-1, 0xe2de9fe2dcd5c686, 0x519979c4cf661b56),
    ],
    [
        c(0, 0x309857a05e0765fb, 0xa4491dcec752ae1f), c(1, 0x43cbcd6f18b45ce7, 0x9e113fb1abd8887a), c(-1, 0x720fde0e77e53b50, 0x87cfe52fb064d303),
        c(0, 0x52f58e7fcae80bb9, 0x1c743b388aaeb127), c(-1, 0xc973a405b46036da, 0x70c92c9ef2ed593f), c(0, 0x263c32254d748e12, 0x6a37d12c082eb182),
        c(-1, 0xe52b119317c5ddcc, 0xe954c8d72c6eab94),
    ],
    [
        c(0, 0x359ebc5b69d927df, 0xc23d9780306c696a), c(1, 0x3f6ba49a9173cce6, 0x9389d660a4c63571), c(-1, 0x75df4a1e10bea320, 0x5fa1688b28048bc2),
        c(0, 0x4fa428385e7713f3, 0x156a420ca19b6927), c(-1, 0xcc574e2ea9b25c6e, 0x943e7572ce817d93), c(0, 0x23b89d621a1a877e, 0x05eb4f2861a97cea),
        c(-1, 0xe7420c47b15bf2d5, 0x1b2add84de7a663b),
    ],
    [
        c(0, 0x3a93dc9864b2df91, 0xe96aca04740a8838), c(1, 0x3b295abaa3fe5557, 0xe7e153d609b32e94), c(-1, 0x7987f49882b293ce, 0x8111d2401feb779e),
        c(0, 0x4c7f74c944da84d2, 0xc9768f7eccb7d581), c(-1, 0xcf0aa3959221b4bc, 0x56e9c70e6af0e632), c(0, 0x2167262fd0dd9aea, 0xd2020fb088fc81ff),
        c(-1, 0xe9290aec560f67e4, 0x3fc17dfd4c60f63e),
    ],
    [
        c(0, 0x3f782d7204d01447, 0x51b3314f09de6be5), c(1, 0x3703c1f4d0fe78f6, 0xe6d05f77beb38109), c(-1, 0x7d0be43aa33636ac, 0x8cfb812649c8fbe5),
        c(0, 0x49848d48f00ddb72, 0x94f4922b64fe3531), c(-1, 0xd19161d2dbfb66b2, 0x16663a7280770927), c(0, 0x1f434e0cb3705701, 0x4f7dc984863a1f14),
        c(-1, 0xeae4e8b4da57407a, 0x54036bbdf0acc647),
    ],
    [
        c(0, 0x444c1f6b4c2dd72c, 0x25c169e5693a7f06), c(1, 0x32f9bc1cdb943554, 0x88f6d258073e3c7e), c(-1, 0x806cfe4a7acdd681, 0x287f2a5415188479),
        c(0, 0x46b0c3f08f4dc15e, 0x471b9ebd8ab60998), c(-1, 0xd3eef122851a9a7e, 0x8189889ea2eb6669), c(0, 0x1d490ae02919a91d, 0xd1dc295901d9fbf2),
        c(-1, 0xec79f510794acb00, 0x8cd8eba1671da6dd),
    ],
    [
        c(0, 0x49101eac381ce609, 0x16e52e91300efeef), c(1, 0x2f0a39b3764d7af8, 0xd6de3117a110be34), c(-1, 0x83ad0925fe18cfdc, 0x5310c4f8493183b1),
        c(0, 0x44019f0c4f04d049, 0x0228c954b6df5253), c(-1, 0xd6266cfa4013ee34, 0xa5fd2156a02772ad), c(0, 0x1b74b9e5210760c8, 0xb5bc68d637923cb2),
        c(-1, 0xedec04e80a9e1a33, 0xb391bbd193930b89),
    ],
    [
        c(0, 0x4dc4933a9337b366, 0x44cdb2581fb9186e), c(1, 0x2b3438f87b495857, 0x7bfbe27ef55728e7), c(-1, 0x86cdae9822770db9, 0x03368aebd7c9604c),
        c(0, 0x4174d46d23bcbd03, 0x3cc329a01dcd751d), c(-1, 0xd83aaba9f254750f, 0xf1a3377e43e9f869), c(0, 0x19c314319693e19d, 0x005a92d58ef44efc),
        c(-1, 0xef3e818c85ca11bf, 0xd69aa7e01d3c0ecc),
    ],
    [
        c(0, 0x5269e12f346e2bf9, 0x24afdbfd36bf6d33), c(1, 0x2776c50ef9bee7f1, 0xe1629595211c2179), c(-1, 0x89d07dfa0893cf79, 0x5b65fb2ad00f31d7),
        c(0, 0x3f08454dbc4a4c68, 0x17851d5e32670fbc), c(-1, 0xda2e4524abea26a8, 0x816df0347e942a83), c(0, 0x183124a3da95c865, 0x0c2000337875fc37),
        c(-1, 0xf07475ab4c95b7df, 0x67616b1f2266b973),
    ],
    [
        c(0, 0x570068e7ef5a1e7e, 0x802c48281a2eb745), c(1, 0x23d0f5318e5dce04, 0xdf1d1a1b6644f2c7), c(-1, 0x8cb6ee25553adf79, 0x581de4aecfb39e7b),
        c(0, 0x3cb9fa9df8871203, 0xd5148d50b859070c), c(-1, 0xdc03990c35ceea6a, 0x223206ca3db8a847), c(0, 0x16bc3f0643a94c6d, 0x850ad841c185d849),
        c(-1, 0xf19098907f95d879, 0xfd3f1680758b3612),
    ],
    [
        c(0, 0x5b8887367433795e, 0x35482d13dc0f110d), c(1, 0x2041ebf5a27bf1b2, 0xfe4a942777394506), c(-1, 0x8f825f3c4295e72c, 0x6376441a0be583cf),
        c(0, 0x3a8821a9c787fe70, 0x685a8dea9d7ef90c), c(-1, 0xddbcd415e3569ec1, 0x3b8204f359cea92f), c(0, 0x1561f840a9d3de5e, 0x8371f296ae85bd46),
        c(-1, 0xf29557f4946443e8, 0xf1708a8db75ce841),
    ],
    [
        c(0, 0x6002958c587150ca, 0xbad827d37deb2236), c(1, 0x1cc8d69c50557f28, 0x83c31b07f97e3a2c), c(-1, 0x92341c4b76b18efa, 0xe0411c599abb1f08),
        c(0, 0x38710911a2da8fc9, 0xc247e916d8ed0249), c(-1, 0xdf5bf4dc6018086a, 0x11b9458c434802af), c(0, 0x14201f74cbf7f572, 0xc3f25ee3edb475e7),
        c(-1, 0xf384e0892642cedf, 0x3b1d13964910c715),
    ],
    [
        c(0, 0x646eea247c5c22d2, 0xcad415ae1a715618), c(1, 0x1964ec6fc948574f, 0x1fed2eee4506a85c), c(-1, 0x94cd5cc93dbde652, 0x54f5fd1c09c5df3f),
        c(0, 0x36731e0c031ed01e, 0xe5ffe898792a9c76), c(-1, 0xe0e2d02faa53f85b, 0x33af4547780936d5), c(0, 0x12f4b7e79a44f87a, 0x8b06a265e4a7bf29),
        c(-1, 0xf46125713764df70, 0x04acb852a6d4b9ca),
    ],
    [
        c(0, 0x68cdd829fd814275, 0xf1035e5e7b16c7f7), c(1, 0x16156e2c36599bc3, 0x2f671f303006dd56), c(-1, 0x974f45f564fb267e, 0x2033b69f9227b9e5),
        c(0, 0x348ce9e82b6e848e, 0xe6ad372d335c26db), c(-1, 0xe25314f23a92e411, 0xd7cf10b903e42ce9), c(0, 0x11ddf39d83bab3b0, 0x8be6b4f315707d0d),
        c(-1, 0xf52be6ca9264b9a3, 0x6575b27abe7047d0),
    ],
    [
        c(0, 0x6d1fafdce20a8290, 0x51bbe3f6289e3ab7), c(1, 0x12d9a57323db963a, 0xcd11a599ca6fb826), c(-1, 0x99baec1c9d06ecdf, 0x35488d4a01e32253),
        c(0, 0x32bd0fcb899ca87b, 0xcffbd461d1bbc599), c(-1, 0xe3ae4f907690e1d9, 0xfef85bf9b0e8a763), c(0, 0x10da2e936b7f0824, 0x441188154201aa24),
        c(-1, 0xf5e6b7687b4be176, 0xaa06eb177b703301),
    ],
    [
        c(0, 0x7164beb4a56d59f9, 0xfb952bbbccc314f0), c(1, 0x0fb0e4489f082edc, 0xe9f0aa3738d7cbf6), c(-1, 0x9c1153c1fddbd5d0, 0x295d39884b43d6cb),
        c(0, 0x31024aa3ade1ad79, 0x37e2c2bb24afcfa7), c(-1, 0xe4f5ed1dec58e002, 0xe78576d9cc3a4793), c(0, 0x0fe7ea80edb54e72, 0xe2d3a26a996d86b3),
        c(-1, 0xf69301db3a5575d5, 0x1b581bf3b23db17d),
    ],
    [
        c(0, 0x759d4f80cba83bf8, 0xfaf866415554d6bf), c(1, 0x0c9a849940224ee3, 0xe0290fe5b2271857), c(-1, 0x9e5372b103146ba1, 0x2109de6906a3a424),
        c(0, 0x2f5b6b4788c98169, 0x2a1f53d5c69c4296), c(-1, 0xe62b3e226922edfd, 0xbcec647c65ec1ce7), c(0, 0x0f05cb132f38b00a, 0x789e547fce09b60d),
        c(-1, 0xf7320cdc1c228444, 0xdcbaff77747cf9ea),
    ],
    [
        c(0, 0x79c9aa879d534831, 0x46784bd1c44ccd5f), c(1, 0x0995e7c86d6f9e65, 0xee86dbeec7692788), c(-1, 0xa08230fa1ad32709, 0x4cbcf588bf9abe9e),
        c(0, 0x2dc756c3356cbccd, 0x6fa3ba2656cdaa89), c(-1, 0xe74f791fc61f5740, 0xb45ed713e9b1497b), c(0, 0x0e329291a92641ca, 0x811c71df09a8989f),
        c(-1, 0xf7c4ff322db29391, 0xa0dec13daa4f048c),
    ],
    [
        c(0, 0x7dea15a32c1b3b38, 0x64c6001143d6c8d6), c(1, 0x06a276463354cf10, 0x4fb8c3f8a05e7746), c(-1, 0xa29e69dbac2848fd, 0x150e0cba486bec52),
        c(0, 0x2c4504ca1aece75a, 0x658aa4ac5fa61c85), c(-1, 0xe863bcd835043c06, 0xde7f0f74fb6c222d), c(0, 0x0d6d1ee046d8e22e, 0x874c2caa5601ea25),
        c(-1, 0xf84ce321256c32e0, 0x600f0657ee63a56a),
    ],
    [
        c(0, 0x81fed45cbccbf99c, 0xa1a3202b3d68f965), c(1, 0x03bf9f2c1c430687, 0x30e4f03f9cd88aed), c(-1, 0xa4a8ec994a1f0340, 0x8943795d11450c75),
        c(0, 0x2ad37e4ba5367456, 0xbd7ca19c3520ad81), c(-1, 0xe969125be92fb9e9, 0x127c26929eec3eeb), c(0, 0x0cb466d3ced96445, 0x9f8d722f9637d84c),
        c(-1, 0xf8caa971816232f1, 0xe7e3220fd30f4dae),
    ],
    [
        c(0, 0x86082806b1d532c4, 0x12ba94db12ef0aa8), c(1, 0x00ecd7e08020ee5b, 0x3489929408ce3755), c(-1, 0xa6a27d429e13a212, 0x667ca5e64e629b4e),
        c(0, 0x2971dc273c3eb161, 0x09b4662968c09776), c(-1, 0xea606ee42b952d5c, 0x30e6a5c8908ba2d8), c(0, 0x0c0777cef769139e, 0xdf3a0566d569009c),
        c(-1, 0xf93f2c1ed4c4181c, 0x3c36019dafe0e50b),
    ],
    [
        c(0, 0x8a064fd50f2a1cf0, 0xad29518b0252c225), c(0, 0xfe299bbfce943694, 0x436b81247fa2f2d0), c(-1, 0xa88bd56b6df8fcb0, 0x5f57c1c8b6b531bb),
        c(0, 0x281f45fc7c149212, 0x5c296c4e3f0c15c1), c(-1, 0xeb4ab581334a410e, 0xb9c9c6c4201f76e6), c(0, 0x0b65739fbe334190, 0x4de709a1e9861bce),
        c(-1, 0xf9ab30b77cdadd55, 0xee3cd35988e833c9),
    ],
    [
        c(0, 0x8df988f4ae806f1d, 0xa89d4ee66c3700e4), c(0, 0xfb756bcb622b2b23, 0x264ab5b583f740e0), c(-1, 0xaa65a4d6013cd854, 0x791a72245b4c7aeb),
        c(0, 0x26daf11500af5e49, 0xe2c43f5a28e2ef3f), c(-1, 0xec28b89f7ecedb99, 0x4481d4cb2c0a5040), c(0, 0x0acd8e95a788c9c5, 0x4769f6528a01713b),
        c(-1, 0xfa0f6a77753c8dd2, 0xcbe17b9f82041757),
    ],
    [
        c(0, 0x91e20ea1393e4040, 0x76630d4c409dd918), c(0, 0xf8cfce5d73ff9e33, 0xaee87b58480e6a7e), c(-1, 0xac3092110892a463, 0xea9f4a8c817ed592),
        c(0, 0x25a41f655fbf4c95, 0xa2e75edc8ecbb1c1), c(-1, 0xecfb3b68e00c7a8e, 0x70f5010a5d22b35d), c(0, 0x0a3f0dca725f1584, 0xb95b0f92f071c1d2),
        c(-1, 0xfa6c7c26b916b9e0, 0x9e116c601fe281d2),
    ],
    [
        c(0, 0x95c01a39fbd6879f, 0xa00b120a068badd1), c(0, 0xf6384ee1d01fa3d9, 0xbba59e56b03aea57), c(-1, 0xaded3b0a11aa4523, 0x6589043b53bb8dd1),
        c(0, 0x247a1ea32a064324, 0xc4c83fb91c9aa945), c(-1, 0xedc2f304f3e9393e, 0x4d45487dbd472453), c(0, 0x09b9459798466d9c, 0x1057820c557b4f1b),
        c(-1, 0xfac2f9c284408ced, 0x56a66f14258e5685),
    ],
    [
        c(0, 0x9993e355a4e53643, 0x5c902fd21101093a), c(0, 0xf3ae7d92f2ed2fa8, 0xf672d99487eed7a9), c(-1, 0xaf9c359577628769, 0x1b3b4a33b69eb119),
        c(0, 0x235c476e05e7da4f, 0x68720345014114b2), c(-1, 0xee8087bc53eab8c3, 0x9dfbd3a6d78c7057), c(0, 0x093b9833a0059b41, 0x1841f5b9c2f629ce),
        c(-1, 0xfb1369f7d334d9c4, 0x3c263fbf653ad3a4),
    ],
    [
        c(0, 0x9d5d9fd5010b3666, 0x5592074827cb508e), c(0, 0xf131ef3b3ed0a8a6, 0x8b2141286721e19a), c(-1, 0xb13e0feca90c6bda, 0xce2ee36b2877e8fc),
        c(0, 0x2249fc8a26cb8689, 0x9788722b174cd0cc), c(-1, 0xef34960172d82d13, 0x9434e4505f54b589), c(0, 0x08c57472e237e287, 0x8cd3bf404c9ca1b1),
        c(-1, 0xfb5e4774af41785d, 0xd93bf9a646f252fc),
    ],
    [
        c(0, 0xa11d83f4c3554b38, 0x3b0e8a55626c3262), c(0, 0xeec23cfa001eba14, 0xefcaec285a6059b2), c(-1, 0xb2d351238f8f766e, 0x68efeddd95f106fc),
        c(0, 0x2142aa2a915a1fad, 0x861fa48ac2ebd897), c(-1, 0xefdfaf61c2e87384, 0xaa647387dd0ad6aa), c(0, 0x085654a7e4566977, 0xc59821d6653a233e),
        c(-1, 0xfba402151f2e6e42, 0x7d9079c7662d9ecc),
    ],
    [
        c(0, 0xa4d3c25e68dc57f2, 0x495fb7fa6d7eda67), c(0, 0xec5f040bfaffb670, 0xe21e4f2abecafa05), c(-1, 0xb45c7995c571b5ec, 0x857c11d33c57f8e3),
        c(0, 0x2045c549c437c418, 0x728b680f98de3f80), c(-1, 0xf0825b617b634e1f, 0xe8069197fba0a7f7), c(0, 0x07edbd9fe2b08cc6, 0x1c60f9969f413ef7),
        c(-1, 0xfbe4ffeff82c3bd8, 0xb81c0e932aa10523),
    ],
    [
        c(0, 0xa8808c384547c6ef, 0x4a49bc591348f145), c(0, 0xea07e597448dab0b, 0xb7058198ca0d0846), c(-1, 0xb5da034c46b9b690, 0xb9cf747be0a1803e),
        c(0, 0x1f52cb0f802e0470, 0xe6f478742099ff5d), c(-1, 0xf11d18441377a793, 0xe39ac4a06601253d), c(0, 0x078b3db8874c8e81, 0x6914dbd0be8eea58),
        c(-1, 0xfc219e474371d6e2, 0xf7ec1470b852aa5b),
    ],
    [
        c(0, 0xac241134c4e99e1c, 0x6c5e946b4ae30895), c(0, 0xe7bc867a2d4b0915, 0x0dc2ed0426fd10f7), c(-1, 0xb74c625c2f24dd2f, 0xe5e541ac7f4db4f0),
        c(0, 0x1e6940428a47a497, 0x48a6eb600e904840), c(-1, 0xf1b05bc34f52d424, 0x56d67981e8562567), c(0, 0x072e6c0c2473a744, 0xa9b344d772bb13a3),
        c(-1, 0xfc5a325f77970dfb, 0xc9f4917a58a17479),
    ],
    [
        c(0, 0xafbe7fa0f04d75c6, 0x58d602e66b04d3b6), c(0, 0xe57c8f1d0792651b, 0x3e57b3c111c3ca08), c(-1, 0xb8b4053f101725f3, 0x997088548f01f73f),
        c(0, 0x1d88b0c55e96723c, 0xe527348ed7646ba9), c(-1, 0xf23c93b68a516c1c, 0xa98ee2f69bd7242d), c(0, 0x06d6e7b2177a0b3e, 0x795898d19e5d384f),
        c(-1, 0xfc8f0a405eda0dbf, 0x3856e652a11fc4e1),
    ],
    [
        c(0, 0xb35004723c465e69, 0x76da1c872983511e), c(0, 0xe347ab4698bad7ce, 0x36b85451384be6d9), c(-1, 0xba1155255bd43f19, 0xb7f23102104acdb8),
        c(0, 0x1cb0af1ce39e534a, 0x9fc10286c2477708), c(-1, 0xf2c226abbca4517d, 0xbb9af8a3985c6cf1), c(0, 0x068457113c98081f, 0xd97149a23bb8da31),
        c(-1, 0xfcc06d622af2e849, 0x14bc3323ca055160),
    ],
    [
        c(0, 0xb6d8cb53b0ca4ecb, 0xef83f1ab5130c34c), c(0, 0xe11d89f3076d7dcd, 0x25ee6bdba7c59d1a), c(-1, 0xbb64b64358dc0b53, 0x57c2d871203a382f),
        c(0, 0x1be0d40045045f6e, 0xd15b4635173e600b), c(-1, 0xf341747393496449, 0xfc8ecdde73930dd2), c(0, 0x0636674298a4224d, 0x2b3d8c0547961146),
        c(-1, 0xfcee9d48ea04f7a3, 0x215b82fc71ed634c),
    ],
    [
        c(0, 0xba58feb2703a9e37, 0x2bc1fe8a8648e9ec), c(0, 0xdefddd2d1d17f038, 0x34eec7088d9e811f), c(-1, 0xbcae881906901a21, 0xa8e595237fc94595),
        c(0, 0x1b18bdf13070d3d7, 0xfd667483f4703272), c(-1, 0xf3bad6a1ce243d38, 0x3e26e0ca8c82cc35), c(0, 0x05eccb829241df17, 0xe89b2a8399456ad8),
        c(-1, 0xfd19d6104d0fd158, 0x2d0af1fe807e8866),
    ],
    [
        c(0, 0xbdd0c7c9a817204f, 0x55bbf90ce3f6815b), c(0, 0xdce859e9b38cf4b4, 0x17b08f73b2f2ad22), c(-1, 0xbdef25b5537a3fe9, 0x6749182dc8bf1635),
        c(0, 0x1a5810dbc1d12396, 0x09e2af64aa1b43bf), c(-1, 0xf42ea102f8d0e57f, 0x46fa0fdcaa1d4dd0), c(0, 0x05a73caf4292c4da, 0x54d8e73edd092d07),
        c(-1, 0xfd424ee9759f118e, 0x4b78d45b2d0c4059),
    ],
    [
        c(0, 0xc1404eadf38396de, 0xe021361e13a30973), c(0, 0xdadcb7e52ac6eac2, 0xc047e4d56029f614), c(-1, 0xbf26e5f4fd8ebe15, 0x8759570bbae691fa),
        c(0, 0x199e75bd7c8e9b83, 0x537ebd82cfb2c6e8), c(-1, 0xf49d2208770317d9, 0x503adcc30ee0b05e), c(0, 0x056578d28e73c91b, 0x33b7b41bc172a69f),
        c(-1, 0xfd683a8c4d3a0e54, 0x2669bd94af7a598e),
    ],
    [
        c(0, 0xc4a7ba58377c5a03, 0x75163ec8d56242f9), c(0, 0xd8dab182c564ce19, 0x88caf47f890fc5dd), c(-1, 0xc0561bbd6d818166, 0x2fe4376ad4556071),
        c(0, 0x18eb9a52be116c13, 0x13d626190528b840), c(-1, 0xf506a32bc4813b34, 0x7c6ef34aadcdc6d5), c(0, 0x052742b6dd8202fe, 0xa790f7fb08f6baf3),
        c(-1, 0xfd8bc79dbc3d3f3a, 0xb2310a84b235030a),
    ],
    [
        c(0, 0xc80730b0001667f2, 0x1fa8423e8c1443f3), c(0, 0xd6e203adcce88c9e, 0xe172806350fc6050), c(-1, 0xc17d1633d7ab492e, 0x124715b0f1091d52),
        c(0, 0x183f30ca2334cf58, 0xa369cf1a110ac3ec), c(-1, 0xf56b6949b2b0fdc9, 0x3600f4d314674410), c(0, 0x04ec6185641f6c2f, 0x4a13769174af86de),
        c(-1, 0xfdad210bee7d60b2, 0x5879f98c26d32fe7),
    ],
    [
        c(0, 0xcb5ed69565afaf7f, 0x6248a98a36f8173b), c(0, 0xd4f26dbc60f8e90e, 0x2c415dc6b3b97261), c(-1, 0xc29c20f0e6f875c6, 0xd3bfb6e933728975),
        c(0, 0x1798ef7d664f8b42, 0x4c909f3351d032ba), c(-1, 0xf5cbb4f659ed746b, 0xb0223ebd94d8648a), c(0, 0x04b4a06d1200d1e0, 0xb190857787d7caae),
        c(-1, 0xfdcc6e61b19d2504, 0x33dcc32b41a402f5),
    ],
    [
        c(0, 0xceaecfea80859b33, 0x2ac903a413e5a847), c(0, 0xd30bb153d6f6b177, 0x63656227c948b4ca), c(-1, 0xc3b3843130e0f402, 0xa79306ece79fdb36),
        c(0, 0x16f890af4647bf62, 0x79e3d840105152ed), c(-1, 0xf627c2ca6336d212, 0x80368b5b16fb82e8), c(0, 0x047fce514fe461be, 0xfa6ef738abb2e141),
        c(-1, 0xfde9d411dab8abe7, 0xc722f7329dd4a378),
    ],
    [
        c(0, 0xd1f73f9c70c0f683, 0xcc68d510b4a2b099), c(0, 0xd12d924e9118c346, 0xb1e7a2d801fe2864), c(-1, 0xc4c38502ac69fd1b, 0x0102372146098089),
        c(0, 0x165dd24e10f1369a, 0xb70c30e54ce7f4bc), c(-1, 0xf67fcbaa3efd8c73, 0x18e051835be68964), c(0, 0x044dbd7fcd50fac1, 0xd7a01ed6e0dc8fb6),
        c(-1, 0xfe0573bb866b3b63, 0xe9fbdf1820cb277f),
    ],
    [
        c(0, 0xd53847ac00a69be6, 0xf1be4359106a19b6), c(0, 0xcf57d6a335ffd930, 0xb331dafb84732fe7), c(-1, 0xc5cc656f61a3507c, 0xb45dca92c7cfcbc0),
        c(0, 0x15c875ba73ce3d62, 0x529f221514235fdb), c(-1, 0xf6d40507cfa0cae0, 0xae0189588ee7b58b), c(0, 0x041e436cb3011aa1, 0x1786def64c08ddb6),
        c(-1, 0xfe1f6c67eec405c7, 0x9dbfaf89f6176fee),
    ],
    [
        c(0, 0xd8720935e6435ebd, 0x376a70d849ae77dc), c(0, 0xcd8a464d334dc45b, 0xd4d96ebe9ec0c153), c(-1, 0xc6ce64a582e78461, 0x83189dced2c36fda),
        c(0, 0x15383f923e4d0ad0, 0x810e480bb279b819), c(-1, 0xf724a11f018369bd, 0x5767f1fd86e52c43), c(0, 0x03f13874a02d3296, 0x232bba7ce2bca35d),
        c(-1, 0xfe37dac27e169a11, 0xe7cebee37f8ac5df),
    ],
    [
        c(0, 0xdba4a47aa996d25a, 0x5b8a19b1c637671f), c(0, 0xcbc4ab3677467adb, 0x70ebcf14383c5f8f), c(-1, 0xc7c9bf1d1d588155, 0x64d15a618dee1aca),
        c(0, 0x14acf77ec7dd2222, 0xfa803e117e484945), c(-1, 0xf771cf2dbf3261e5, 0xd9e24bd20a56a5c1), c(0, 0x03c677a3e88afc60, 0x603409c67830a5c8),
        c(-1, 0xfe4ed94bb35949c0, 0x6c91c8b2ec84ce0b),
    ],
    [
        c(0, 0xded038e633f36da8, 0xb6f0409b369aacc0), c(0, 0xca06d1224edf0b2b, 0x28514c203e3edf72), c(-1, 0xc8beaebb8a95a2e4, 0x1ae0a884bbf344cb),
        c(0, 0x14266806b2cc4c5c, 0x3481da98d7e4c52f), c(-1, 0xf7bbbba7a5d6946d, 0x0d204db234724144), c(0, 0x039dde8296c44a78, 0x157f923244cf7ada),
        c(-1, 0xfe6480875ca9a699, 0x0afe88f3fc1f14f5),
    ],
    [
        c(0, 0xe1f4e5170d02a99b, 0x4c5a724dbd8180f8), c(0, 0xc850859956e17ef2, 0x115b83b89e62aaa7), c(-1, 0xc9ad6af4ca789a11, 0x8a15cf93455d158f),
        c(0, 0x13a45e62cad35a11, 0x9fbcfec0f1768a6f), c(-1, 0xf8029065d4f2afa9, 0x18051c255c005eca), c(0, 0x03774ce4c392b593, 0xf089b9c68418b3cd),
        c(-1, 0xfe78e7269e51cf4b, 0x81a58c2e91ab89b8),
    ],
    [
        c(0, 0xe512c6e54998b1af, 0xf71c8605583d030b), c(0, 0xc6a197d66ff744a0, 0x17725ccd25ab17bf), c(-1, 0xca9628eae8ba2024, 0x9e814093fbdbfc4b),
        c(0, 0x1326aa55c3a754e9, 0x7e04febc53c94d7d), c(-1, 0xf84674d32c1faf17, 0x287fafeb4b28678d), c(0, 0x0352a4bedcc31803, 0xd0ed0725873c221f),
        c(-1, 0xfe8c222e300dfc1a, 0x42491072d944acef),
    ],
    [
        c(0, 0xe829fb693044b398, 0xc4baee073d4b1b05), c(0, 0xc4f9d8b4a67fe090, 0x4906182ef63e831d), c(-1, 0xcb791b8b8fb18d70, 0x262c0792d70008c6),
        c(0, 0x12ad1e06a0d20ae9, 0x47a21833d9d316c8), c(-1, 0xf8878e1541fe362b, 0xc6fe9bc3cc275356), c(0, 0x032fc9fd814b22d8, 0x7754903a64861a75),
        c(-1, 0xfe9e45192f25a48d, 0x65d2d4273b4aca66),
    ],
    [
        c(0, 0xeb3a9f01975077f1, 0xf5f0cc82aaa9ad7e), c(0, 0xc3591a9e001944fd, 0x03e3ae6c72c57729), c(-1, 0xcc5673abe6ece18a, 0x9c2af935e2ab07b7),
        c(0, 0x12378ddd949154fe, 0x02f6d42c30618fe1), c(-1, 0xf8c5ff3258d2708c, 0x1ee03c4f3f15a81a), c(0, 0x030ea260a076e1da, 0xd5fcbdcda33a3204),
        c(-1, 0xfeaf61f8da0246e3, 0xbb8f306037575081),
    ],
    [
        c(0, 0xee44cd59ffab62f3, 0x39d5d6a218c633a0), c(0, 0xc1bf317b21abf344, 0x732c2e5e67c1387b), c(-1, 0xcd2e6022da1ca71a, 0xebf04df1d03b8ee4),
        c(0, 0x11c5d06327923fbe, 0xef77c2c90cb9cb2f), c(-1, 0xf901e9348f277869, 0x22e5d49904687875), c(0, 0x02ef15599221f287, 0x24fee33272ad8d10),
        c(-1, 0xfebf899181209a00, 0x69619a69bef6584f),
    ],
    [
        c(0, 0xf148a170700a00fd, 0xd5533f1de29abede), c(0, 0xc02bf2a3c1a87936, 0x32c1219852881234), c(-1, 0xce010de1e2bbc967, 0x873df721e063e8c2),
        c(0, 0x1157be217f164119, 0xdfeb9854c2a3b408), c(-1, 0xf93b6b4a8554fe2f, 0x665850ff674d6f6b), c(0, 0x02d10bebe50b2051, 0x1353e69dab55da3f),
        c(-1, 0xfececb74f165f57b, 0xa0e6467ff63446cc),
    ],
    [
        c(0, 0xf446359b13539551, 0x0d1e3f80fbc71454), c(0, 0xbe9f34cfdaef600e, 0xbd44fc161b2811b1), c(-1, 0xcecea80c6cf2ca7c, 0x9c6f72a9ac0fdfc5),
        c(0, 0x10ed31879a75cea5, 0xe9be5553c2cd83f7), c(-1, 0xf972a2e5abc67857, 0xa03f9c692e2a04ad), c(0, 0x02b47090a6b07409, 0xdec5cc6871559c19),
        c(-1, 0xfedd361a94ed757d, 0x567467e1ab2e9ebd),
    ],
    [
        c(0, 0xf73da38d9d4a83eb, 0x6e0f93f7a43e479a), c(0, 0xbd18d00995997e91, 0xca80985f2180c2dd), c(-1, 0xcf97580dee74108c, 0xa5cf8d24dfcdbaaa),
        c(0, 0x108606ce640cf2ea, 0x84bd12c3adc3e69e), c(-1, 0xf9a7abd66960a4e4, 0x4bdf15c61e0620e2), c(0, 0x02992f1bedda37e1, 0x199d9cf6e74292c7),
        c(-1, 0xfeead6f5812cf66a, 0x3ad96fd9628ca6de),
    ],
    [
        c(0, 0xfa2f045e7832aa72, 0x6adf27b820fd03ea), c(0, 0xbb989d9fdb85fe17, 0x3b7f7b603122379b), c(-1, 0xd05b45aec470d57c, 0xf442f673e1865b0d),
        c(0, 0x10221bdf747316ee, 0x8c6f7108b95b2c2c), c(-1, 0xf9daa066454c4b4c, 0x84e167847dcc3df7), c(0, 0x027f34a4761f3c0d, 0x0c1a7fb02385e0ef),
        c(-1, 0xfef7ba88a3cad107, 0xcc13b27921fa9fe4),
    ],
    [
        c(0, 0xfd1a708bbe119b14, 0x945cf6ba73d491ea), c(0, 0xba1e78198f365342, 0xc0fddf6432e6eb6a), c(-1, 0xd11a9727ec489347, 0x093152aa0ea871e1),
        c(0, 0x0fc1503d69758976, 0x50e61bae957636fb), c(-1, 0xfa0b99703bb8f85d, 0x0de733da646ea880), c(0, 0x02666f6d1f4be9c3, 0xde4ab72ed9d97419),
        c(-1, 0xff03ec793a8e65be, 0x9748b637d9ac9e73),
    ],
];

/// `2^z` for `z` in `[0, 1)`.
#[rustfmt::skip]
pub(crate) static EXP2_POLY6_LUT16: [[Scalar192; 7]; 16] = [
    [
        c(1, 0x0000000000000000, 0x0000000000000000), c(0, 0xb17217f7d1cdf279, 0x019c32aad86bfac6), c(0, 0x3d7f7bff07ddee0e, 0xaafc0d528a583e89),
        c(0, 0x0e35846a7aa8e2aa, 0x6c2397a525144358), c(0, 0x027655a0d06faa86, 0xf495e9ef9886fde1), c(0, 0x00575d2d38610496, 0x243f6e1183490a3c),
        c(0, 0x000a50ea900756de, 0xcce77569797ab56d),
    ],
    [
        c(1, 0x0b5586cf9890f629, 0x8b92b71842a98364), c(0, 0xb94d47530aa7c783, 0x3852c3806a906c98), c(0, 0x40388209c28559c6, 0x867c698bfcdf8313),
        c(0, 0x0ed6905b8e567f2c, 0x06dc8378384aecff), c(0, 0x02923de517c2bdd7, 0x20408cc4850638de), c(0, 0x005b3b5e1b6efbdd, 0xc121d09c7bdaa3f3),
        c(0, 0x000ac5d6f0d1d4fb, 0x39faa93dfcc53c52),
    ],
    [
        c(1, 0x172b83c7d517adcd, 0xf7c8c50eb14a7920), c(0, 0xc18181a101f07a84, 0x4c6405ac59820788), c(0, 0x431064350326d75e, 0x9e0234e0865ff7b5),
        c(0, 0x0f7ebd9dc3c0ec90, 0xaa77ab7e6d51ccab), c(0, 0x02af62771f073fd2, 0x562d11b67fd234ab), c(0, 0x005f4565e7ea7ee7, 0x2eb72221ed886524),
        c(0, 0x000b3ff089d3b539, 0x8fc98d2658472d05),
    ],
    [
        c(1, 0x2387a6e75623866c, 0x1fadb1c15cb593b0), c(0, 0xca12b819ac6004b7, 0x78b49264e484b1d9), c(0, 0x4608804586900a3d, 0x8c86990fcef4671e),
        c(0, 0x102e5d0168842398, 0x5593bf79da102ee4), c(0, 0x02cdd157e9de7d3b, 0x889615e5ade81d3f), c(0, 0x00637d357f4ccf29, 0xacb0cd8086e8b8b0),
        c(0, 0x000bbf720734e148, 0x12875dc35e411084),
    ],
    [
        c(1, 0x306fe0a31b7152de, 0x8d5a46305c85eded), c(0, 0xd30508a3913c37ef, 0x24c95be6e2785019), c(0, 0x4922437c582eb971, 0xc3a3dbc84775a657),
        c(0, 0x10e5c2eabd4a26b4, 0xb4c7f95dde0c95cd), c(0, 0x02ed992734c7c8c1, 0x6ca554ad62d08a1e), c(0, 0x0067e4d3c2bfea23, 0x3fa1fa3b8bd27dfd),
        c(0, 0x000c4498ae1d08d1, 0x2a3a5016b71cb5c2),
    ],
    [
        c(1, 0x3dea64c12342235b, 0x41223e13d773fba3), c(0, 0xdc5cbfce38231c7c, 0x02234fa9614723ed), c(0, 0x4c5f2b4655df6c4b, 0x922e838f21b2795e),
        c(0, 0x11a5477a833ea819, 0xbd83345ca6f79bfb), c(0, 0x030ec92a7c18fc71, 0xdd6048d04d64fe10), c(0, 0x006c7e5e8c749cc8, 0xc84e1d6474d3f58c),
        c(0, 0x000ccfa47a24ca1b, 0x19c105bbaf4201ae),
    ],
    [
        c(1, 0x4bfdad5362a271d4, 0x397afec42e20e036), c(0, 0xe61e5ae302be2572, 0xc958707b3f3ec4c7), c(0, 0x4fc0c5f37909189e, 0x1bea186ee2c72a73),
        c(0, 0x126d46b85522fa44, 0x377938ac1c4b213f), c(0, 0x03317154529cac99, 0x15f61db3fa85e305), c(0, 0x00714c0bb40296ad, 0x9f8e576158c26a34),
        c(0, 0x000d60d83c148d7a, 0x2b0c50f517976db4),
    ],
    [
        c(1, 0x5ab07dd48542958c, 0x93015191eb345d89), c(0, 0xf04e8a0d707edf80, 0x5371f650f785cdd5), c(0, 0x5348b3763d18cc93, 0xcd3e9d2a2bf5783b),
        c(0, 0x133e20bee05bbc6c, 0x9e87ee0e6fb0cc78), c(0, 0x0355a24c0b5cc6a1, 0x9fcf067dfd203a1d), c(0, 0x0076502a1e4f9b01, 0xb0f3244cfbd92744),
        c(0, 0x000df879b9ffd9c0, 0x75ac13057547a9bd),
    ],
    [
        c(1, 0x6a09e667f3bcc908, 0xb2fb1366ea957d3e), c(0, 0xfaf2329bd5c60c33, 0x86d37520264ff764), c(0, 0x56f8a62b7f567ab8, 0xfd8fe52fc2b3bc6f),
        c(0, 0x141839ea133858a6, 0xdbb3b7d88db500df), c(0, 0x037b6d75ba484e25, 0x8b57256a309d8189), c(0, 0x007b8d22d980779d, 0x468ab299728c0bf3),
        c(0, 0x000e96d1d0cc8f49, 0xd36f458b6cef0a71),
    ],
    [
        c(1, 0x7a11473eb0186d7d, 0x51023f6cda1f5ef4), c(1, 0x060e71599b95eef9, 0xc51429b88594b8a7), c(0, 0x5ad263ab381e7db1, 0x44099231ff52dabb),
        c(0, 0x14fbfb0756a543d6, 0x99138e43219a8892), c(0, 0x03a2e4fa8f8ca6fb, 0x38d7627fef8d0336), c(0, 0x0081057a457c3332, 0xbfb332bbb57e4431),
        c(0, 0x000f3c2c9736261f, 0xecbb657c8807a8d6),
    ],
    [
        c(1, 0x8ace5422aa0db5ba, 0x7c55a192c9bb3e6f), c(1, 0x11a89d0429358f55, 0x81b244a06418f8bb), c(0, 0x5ed7c5a271cbfee4, 0x96e271cbc3acadad),
        c(0, 0x15e9d187ea7573e1, 0x03a45e35caa3161a), c(0, 0x03cc1bd191a670ad, 0xd91c444c80d473ed), c(0, 0x0086bbd1498fee2f, 0xde400e52a02201b3),
        c(0, 0x000fe8d9825dc24d, 0x8a6796be2ab0bc42),
    ],
    [
        c(1, 0x9c49182a3f0901c7, 0xc46b071f2be58ddb), c(1, 0x1dc648dba5fac26d, 0x5be4296efd329a9c), c(0, 0x630abab6e6113369, 0x31c26d5856d14a97),
        c(0, 0x16e22fb57c76277c, 0x058a6b6a148c3791), c(0, 0x03f725c8ba5b7b75, 0x7494451c9b9ea166), c(0, 0x008cb2e697c840c1, 0x4c7fbe08c6e410b8),
        c(0, 0x00109d2b8bf8b029, 0x4cb4ac861ca5a373),
    ],
    [
        c(1, 0xae89f995ad3ad5e8, 0x734d1773205a7fbc), c(1, 0x2a6d4750ced2151d, 0x655c5cb2baa6d745), c(0, 0x676d4774af1d7ec7, 0xd343ce9d0cb2a980),
        c(0, 0x17e58ce9139262de, 0x9ab22e032a120f0a), c(0, 0x0424178e7afee642, 0xa3cb34992f528e0b), c(0, 0x0092ed97fe9b76d3, 0x7e5c659ac5b4b24c),
        c(0, 0x001159795a2fa182, 0x28576f4aeb735670),
    ],
    [
        c(1, 0xc199bdd85529c222, 0x0cb12a091ba66794), c(1, 0x37a3acd129149d25, 0x6763f50cc5313aa1), c(0, 0x6c0187467ec93661, 0xd0112c1718a4e700),
        c(0, 0x18f465c46969f132, 0x8f4c76d1caa1b141), c(0, 0x045306bbac9217a6, 0x09719464c23ae27e), c(0, 0x00996ee3c986ebfe, 0x75bed9056541482b),
        c(0, 0x00121e1d6941d48b, 0x4bf2b8c7262c2c68),
    ],
    [
        c(1, 0xd5818dcfba48725d, 0xa05aeb66e0dca9f6), c(1, 0x456fd2b2ead302b6, 0x7368b713425c28b7), c(0, 0x70c9ad78d30d4ded, 0xdbb416da0964648a),
        c(0, 0x1a0f3c6dcdead5a0, 0x45c5103f49b22628), c(0, 0x048409ddf089181c, 0xbca46be2dc208676), c(0, 0x00a039ea3148f854, 0x7d29ee6535e2401a),
        c(0, 0x0012eb763700268d, 0x3edd66840052783c),
    ],
    [
        c(1, 0xea4afa2a490d9858, 0xf73a18f5db301f87), c(1, 0x53d85a41fff9be69, 0x89dd8131530b95b8), c(0, 0x75c80648a45513c2, 0xfe6ef0bff3d0e458),
        c(0, 0x1b3698ceb1b46fdb, 0x926efd0661094d54), c(0, 0x04b73882872ef481, 0x2c837e19dd6a6f2d), c(0, 0x00a751eedc685f82, 0x513c0a06848f28a0),
        c(0, 0x0013c1e67034f727, 0x7f408afff116c8c7),
    ],
];

/// `sin(z * pi / 2)` for `z` in `[0, 1]`.
#[rustfmt::skip]
pub(crate) static SIN_POLY8_LUT64: [[Scalar192; 9]; 64] = [
    [
        c(0, 0x0000000000000000, 0x0000000000000000), c(1, 0x921fb54442d18469, 0x883c527c728a69b5), c(0, 0x000000000000000e, 0x20d0855c831c5bed),
        c(-1, 0x5aa218ced20d3d31, 0x55b1a636ca8bbc15), c(0, 0x000000000040900f, 0xb3710e020d5d2109), c(0, 0x1466bc6743f8db4d, 0xf7a9a83d115a35c8),
        c(0, 0x00000015d983e797, 0x6aa5d733d72da025), c(-1, 0xfecd27b23237d1f1, 0xd9e1fc9d0af166c8), c(0, 0x0000bd4232566bf7, 0x7f75da64452ec0d9),
    ],
    [
        c(0, 0x0648557de8d99f7e, 0x4e29cf6e5fed0679), c(1, 0x9200b40eeac0b05e, 0xbd961ed3141c61db), c(-1, 0xf83fcc2a242e7a97, 0xe7685e0768246436),
        c(-1, 0x5aaed8daa01bf81e, 0xb270737f39159e42), c(0, 0x0197fc3b75a45431, 0xa9365425f800a853), c(0, 0x146529b7c3e44929, 0xdfc3128f329e7bc0),
        c(-1, 0xffde71e43a835ced, 0xdafa66c8180791d9), c(-1, 0xfecd3f5b10e99d19, 0xe5ceaa544ee1b90a), c(0, 0x000237a967c22f9a, 0x723eb516b13637d2),
    ],
    [
        c(0, 0x0c8fb2f886ec09f3, 0x76a17954b2b7c517), c(1, 0x91a3b536d740b376, 0x72b91e30e66f20a1), c(-1, 0xf080ca4d86505c67, 0x8ee58bcb7de90bf1),
        c(-1, 0x5ad51706b55ff837, 0x4c526982ee5196fa), c(0, 0x032fb98d1cff23b9, 0x616de3e579d94760), c(0, 0x146071e75c374470, 0xde64468046bfaba1),
        c(-1, 0xffbce8df3e60a1f1, 0xf4973a539a530796), c(-1, 0xfecd86516e985e12, 0xa35f584edf086aef), c(0, 0x0003b1b913ead0d6, 0x2003867fff0c06a2),
    ],
    [
        c(0, 0x12d52092ce19f5cc, 0xbeeeae8129a786b9), c(1, 0x9108c71329aba139, 0x5d3869393f317069), c(-1, 0xe8c42c343599c0c1, 0xbb7693041e041247),
        c(-1, 0x5b14cd6d60be6903, 0x69cbd0ecf6a5b672), c(0, 0x04c6f914dbdfd95f, 0xb215d681fb0e1127), c(0, 0x145895b04d23c0f8, 0xe96ba48f61da0b5c),
        c(-1, 0xff9b6a32bf1427e7, 0x61ec9acbdb5a86f8), c(-1, 0xfecdfc8a59ecb395, 0x56a185ac7e56430f), c(0, 0x00052b36ea4ddf5c, 0xfdc5ab0107f701d6),
    ],
    [
        c(0, 0x1917a6bc29b42be1, 0xd8e72d912977ee71), c(1, 0x90300187f9e7fde9, 0x86ed252c9d583eb4), c(-1, 0xe10b2349eb06c4cc, 0xb393066cfbd3e4f2),
        c(-1, 0x5b6df23b7db712c7, 0x955cea1840ccbdbe), c(0, 0x065d7c05fd85df33, 0xc5df9ef3241988d2), c(0, 0x144d9648e1be0a68, 0x55d86e2abc0f655e),
        c(-1, 0xff79fb08fe2d85ce, 0x699682892940dd16), c(-1, 0xfecea1f397e778e3, 0x74bc29d70345492e), c(0, 0x0006a3e8b4e5f720, 0x9167627c34718c03),
    ],
    [
        c(0, 0x1f564e56a9730e34, 0x4e08e535cadaf147), c(1, 0x8f198602a7472d4c, 0x3f82136bd60bb075), c(-1, 0xd956e06cf06eea02, 0xa69a32a25ac7ee7f),
        c(-1, 0x5be077b1f83d37e6, 0x5f79698e7836bfc6), c(0, 0x07f303b0e1fc3cd8, 0x175c6dfb04a81e43), c(0, 0x143f756340237e66, 0x1966d88b2f296446),
        c(-1, 0xff58a089d8ed8324, 0x4dc0743881175e39), c(-1, 0xfecf7673a6b1722b, 0x841e5411ae60daf3), c(0, 0x00081b945d24b6ff, 0x19e0610f6b2d9b77),
    ],
    [
        c(0, 0x259020dd1cc27444, 0xc002a2684781f080), c(1, 0x8dc57f74b0eee349, 0xd6262f957b5e2845), c(-1, 0xd1a893bf1d67c999, 0x335abe26835fd95f),
        c(-1, 0x5c6c4c27eb604046, 0xc35760f848e733dd), c(0, 0x0987518ca8b89fc2, 0xc1e19faf7beb662a), c(0, 0x142e352d2687e609, 0xfdd31c0a63916b17),
        c(-1, 0xff375fd9fcbe8e5e, 0xfd32261bc36c81c7), c(-1, 0xfed079e9c18a3b60, 0x15d6f58b2a34eff8), c(0, 0x000991fff4e7dd52, 0x13267354d6e3ba34),
    ],
    [
        c(0, 0x2bc42889167f8ca9, 0x8ffbbceed62c7c43), c(1, 0x8c34224d16991305, 0xeabb81a39cf6e780), c(-1, 0xca016c76f136f84a, 0x9c0f618f0bc9b055),
        c(-1, 0x5d115a0d5a708482, 0x487773da4407316a), c(0, 0x0b1a2740d540c447, 0x57ec03d6ed02a022), c(0, 0x1419d84f9533c169, 0x9d605ff0d1b37bbe),
        c(-1, 0xff163e1a1c2b01c2, 0x07678d421ccfc02b), c(-1, 0xfed1ac2de5d5de3a, 0xb82901a17736b45d), c(0, 0x000b06f1bf6828c1, 0xb6d12a12df1f08b5),
    ],
    [
        c(0, 0x31f17078d34c156c, 0x9732300393f33614), c(1, 0x8a65ac7042afc6e0, 0x7b2dfa0095e106a6), c(-1, 0xc26298b0d10e7ec4, 0x6a9e9add1b8220b6),
        c(-1, 0x5dcf87ee8434b81a, 0xfe611ec205e78b8e), c(0, 0x0cab46aeec599210, 0x745d7dfa061c18e0), c(0, 0x140261ee6580c87e, 0xac4b8ed91f7be3ed),
        c(-1, 0xfef54066247085c4, 0x653b465bd0735dbf), c(-1, 0xfed30d10d94847f0, 0xb85c5fdbe5c676e0), c(0, 0x000c7a303a209cb7, 0xac4063ab4ff29ab1),
    ],
    [
        c(0, 0x381704d4fc9ec5f9, 0x43af186b79b2a0f3), c(1, 0x885a652e7f04114d, 0x639f9ac39e647a8e), c(-1, 0xbacd454071c9b258, 0x4518b0158027c646),
        c(-1, 0x5ea6b877cfacb00a, 0x48d16b28b0aa75dc), c(0, 0x0e3a71fc08446543, 0x08782a71bfa3fc73), c(0, 0x13e7d5a7cde4d2f7, 0x2f087b3a1907bbce),
        c(-1, 0xfed46bd473cfc804, 0x4b9b03a53d42482b), c(-1, 0xfed49c5c312dab0a, 0x425fa138cd8b5a7c), c(0, 0x000deb8225acc9f7, 0x8e14445d27ef026c),
    ],
    [
        c(0, 0x3e33f2f642be355e, 0x90887712e9dc9663), c(1, 0x86129d38f598dab5, 0x3a63c70940a4d854), c(-1, 0xb3429d8274598443, 0x438b0a422c30a52c),
        c(-1, 0x5f96ca7a51c69547, 0xfd8e6cc4e5152798), c(0, 0x0fc76b9a62905e9f, 0x8f17dfddb82347a8), c(0, 0x13ca3793d31e4455, 0x153d387b8d12fa76),
        c(-1, 0xfeb3c57510b7a0bb, 0xa1e9963a71faf2b2), c(-1, 0xfed659d25aceaddc, 0xb4469e7926f96a60), c(0, 0x000f5aae8e9cbd46, 0x90bd1671f168f0ea),
    ],
    [
        c(0, 0x4447498ac7d9dd82, 0x4c20ab7aa99a2183), c(1, 0x838eae953f33aabe, 0x3e059529b0e3af3d), c(-1, 0xabc3cb2e3c078cff, 0x0d7fa7312a930d54),
        c(-1, 0x609f98f0eb53fd1c, 0x5041347e258c5c39), c(0, 0x1151f652d207305f, 0x5b27a2ac993ddf9a), c(0, 0x13a98c43a69802a4, 0xf3ac0ff850569150),
        c(-1, 0xfe935250e1ea9ed1, 0x548d377cec32bd70), c(-1, 0xfed8452ea4ef1a65, 0x988305078e5c5ffd), c(0, 0x0010c77cd63d37a4, 0x3822605a090b0d79),
    ],
    [
        c(0, 0x4a5018bb567c16a2, 0xd725d3b9ed35fbaa), c(1, 0x80cefc8f819ea296, 0x64035471ada3a7eb), c(-1, 0xa451f62805ae2dca, 0xea7618852ac84d30),
        c(-1, 0x61c0fb05fe74e6c9, 0x82fe2fa6d815dbb8), c(0, 0x12d9d54e3b3eb306, 0xba81310b49ee968d), c(0, 0x1385d8c0f21de390, 0x66443e4491de9729),
        c(-1, 0xfe731768e7bdcc06, 0xcd7ac322552cece4), c(-1, 0xfeda5e254a6598b3, 0x6b7b322811f88f56), c(0, 0x001231b4bb52d564, 0x69d6d9d2e9cd411e),
    ],
    [
        c(0, 0x504d72505d98050c, 0x97c4afa25181e605), c(1, 0x7dd3f3ab1fbfa952, 0xbd68af4ef764650d), c(-1, 0x9cee445346fa1e51, 0xdcad480644053a02),
        c(-1, 0x62fac419ba9742fb, 0x1b9ad2f73c04e86b), c(0, 0x145ecc1ef25a9ca7, 0x39f20a708c4241ac), c(0, 0x135f228d10fd5d35, 0xa81bb18711545604),
        c(-1, 0xfe5319b5768f4f63, 0x54a581c6c0d3843c), c(-1, 0xfedca4637dcad1b2, 0xcf9ed69df47ad471), c(0, 0x0013991e62c6cb7e, 0xfeb5f4eef6e41313),
    ],
    [
        c(0, 0x563e69d6ac7f73f8, 0x408fca9cc277fc1f), c(1, 0x7a9e0991fde14272, 0x4c1cc871b741d8f3), c(-1, 0x9599d9655cbea091, 0x3d8bbde38cc9c4e2),
        c(-1, 0x644cc3c8fe127109, 0x79034bc6e3e589d7), c(0, 0x15e09eca0c8bfdc6, 0xacb2228615fd1c09), c(0, 0x13356fa036b12589, 0x698beafac1d63706),
        c(-1, 0xfe335e25729363e7, 0xa8ffd5ce5b679a85), c(-1, 0xfedf178f763e2d20, 0xcd1b45277a9001d6), c(0, 0x0014fd826043e4a1, 0xf294268ad50badac),
    ],
    [
        c(0, 0x5c2214c3e9167abb, 0x4e61f79b3a36f1dc), c(1, 0x772dbd025cc1a056, 0x01a1f8c0e9c50a74), c(-1, 0x8e55d6b88f59639f, 0xac34e21c10475ebe),
        c(-1, 0x65b6c5f4cc4f0c16, 0xb7051da22e14218b), c(0, 0x175f11d09fdea8f5, 0x865b64ceaad4cf95), c(0, 0x1308c668833943a8, 0xc6bc720c5f39fa59),
        c(-1, 0xfe13e99d8d15e4ca, 0x32a76dd7004ddedb), c(-1, 0xfee1b7487d3e3293, 0xd4bd06f50ac84c97), c(0, 0x00165ea9bec26a01, 0x1b1f89b648dc1a09),
    ],
    [
        c(0, 0x61f78a9abaa58b46, 0x98916152cf7eee1c), c(1, 0x738395bb4e343866, 0x4ee6c90a1b2e51e5), c(-1, 0x87235b1f7415d88f, 0xcba69667b91e91f8),
        c(-1, 0x673892ca575479e3, 0x97d05dd8445d6198), c(0, 0x18d9ea38efe764ae, 0xa10417d84cf2741b), c(0, 0x12d92dc90543e9f7, 0x1ee7b63de97ad4b1),
        c(-1, 0xfdf4c0f7834e7707, 0xe3d9a9e56a390fd4), c(-1, 0xfee48326fd926b0c, 0x124b8a485ad67918), c(0, 0x0017bc5e0901a680, 0x8848ccc61a09a7bf),
    ],
    [
        c(0, 0x67bde50ea3b628b6, 0xd409485edd56b172), c(1, 0x6fa02467c6596411, 0x7a912754e20df0eb), c(-1, 0x800382b8b2716571, 0x32ffe7973f953337),
        c(-1, 0x68d1eecb9b7ef280, 0xf07f284bd894129b), c(0, 0x1a50ed9785e8b9f7, 0xf8d12db75c37bb9b), c(0, 0x12a6ad18aa4e3dbe, 0xdef844a0d17739eb),
        c(-1, 0xfdd5e9015ee51a00, 0x14799e6954e88d82), c(-1, 0xfee77abc9344764e, 0xb7ac3d62edd237d0), c(0, 0x0019166951edb5ac, 0xf0949bdd4c6979c5),
    ],
    [
        c(0, 0x6d744027857300ad, 0x9b165cba0c171818), c(1, 0x6b8402884ca66846, 0xf6125e411a487216), c(-1, 0x78f766c334127b9a, 0x2f1cb64807a7994e),
        c(-1, 0x6a829ad88c0a2e35, 0x1fe0dc61006966e9), c(0, 0x1bc3e21833075cf2, 0xd3c791e039e38713), c(0, 0x12714c211ce6f8de, 0x664f0cfd474e17f2),
        c(-1, 0xfdb7667cb844a623, 0xee2eb0365716b743), c(-1, 0xfeea9d941ca5dd7d, 0xd04ac5e485cd9c0f), c(0, 0x001a6c963cf052ff, 0x628e2f838b2bae60),
    ],
    [
        c(0, 0x7319ba64c711785a, 0x1439670dfe3d68e6), c(1, 0x672fd25b502e8c1f, 0x90c5c642709c9508), c(-1, 0x72001d72c634224e, 0x89e4db13d63c8e5f),
        c(-1, 0x6c4a5438cf069187, 0x1fbec6a74dd230dc), c(0, 0x1d328e86fb2a8e9d, 0x33b579acffcce13e), c(0, 0x1239131d913f9365, 0x3e73fc6a18185614),
        c(-1, 0xfd993e1dfad87986, 0xa5ac767286ce4cc8), c(-1, 0xfeedeb31cc6002ed, 0x4e92f683b7de25e7), c(0, 0x001bbeb0062b6126, 0x6a49f43062d683a3),
    ],
    [
        c(0, 0x78ad74e01bd8ec78, 0x362474f1a105878f), c(1, 0x62a43ec422d3aea0, 0xc8ae4c5e27321c96), c(-1, 0x6b1eb9c53336080b, 0xffbbd5adcab4fb09),
        c(-1, 0x6e28d4a6073891d3, 0x6f53ef05d9ca46be), c(0, 0x1e9cba58e7286ff0, 0xc328c694822ac423), c(0, 0x11fe0ab9803b5d7d, 0x29322b7a278854a2),
        c(-1, 0xfd7b748bab52465d, 0xbc84fdade7a0aeb3), c(-1, 0xfef163133c8b662c, 0xc7a6e24ddbbd6ce3), c(0, 0x001d0c828a9be47e, 0x6ea708907620cbae),
    ],
    [
        c(0, 0x7e2e936fe26ae7ed, 0x13e03e4889485c69), c(1, 0x5de1fb309f3a02af, 0x9861b6d4b8e4efb7), c(-1, 0x64544b57daeea5f7, 0x0546a4da363ece42),
        c(-1, 0x701dd256aa4c2a83, 0x73a7073375952224), c(0, 0x20022db4bce20dbe, 0xab192e1595dbbd95), c(0, 0x11c03c0f512ea522, 0x573dadabebc9c34f),
        c(-1, 0xfd5e0e5db014a74b, 0x8c05f7fbda858178), c(-1, 0xfef504af82cb4aa2, 0x07dd6bd5726c4c75), c(0, 0x001e55da50242f84, 0xb624da1ccce7781b),
    ],
    [
        c(0, 0x839c3cc917ff6cb4, 0xbfd79717f2880abf), c(1, 0x58e9c37d7d8f3720, 0x3ff6ac5ce38660c3), c(-1, 0x5da1de3dd04974ed, 0x5c4752b4d31fc9e5),
        c(-1, 0x7229000961b09755, 0xde84019e8ff92af4), c(0, 0x2162b17b9bf6f18d, 0x83c70fd9253a54b5), c(0, 0x117fb0a6f282ae9b, 0xd79facbc0ad32116),
        c(-1, 0xfd41101c9bdec8ae, 0xc358b70e292818d7), c(-1, 0xfef8cf77456aa6e9, 0x97fcd704bf143c53), c(0, 0x001f9a848d7c03e3, 0xb7534a9facdfc558),
    ],
    [
        c(0, 0x88f59aa0da591421, 0xb892ca8361d8c84c), c(1, 0x53bc5bd95b694f3f, 0x5e499a0948e173d8), c(-1, 0x57087ad682a6a5ab, 0x58020a0471fc0782),
        c(-1, 0x744a0d10f45b2674, 0x752ded8332bfb18e), c(0, 0x22be0f517dbc3db8, 0x371d856a88f0edf9), c(0, 0x113c72746175e9ef, 0x9a71ca19be80492f),
        c(-1, 0xfd247e40fad51d34, 0x5e0d334800a838f4), c(-1, 0xfefcc2d4d1771b85, 0xa0a65c8e6f8f3277), c(0, 0x0020da4f32056ebb, 0x7e200ad9ccd204ec),
    ],
    [
        c(0, 0x8e39d9cd73464364, 0xbba4cfecbff54867), c(1, 0x4e5a90a67b34c630, 0xb8308cf5dc306df4), c(-1, 0x508925a4f95c4060, 0x094b6bad4c18b54c),
        c(-1, 0x7680a560b79ad8a5, 0x3e8d426b3bb7a928), c(0, 0x241411a59727c973, 0x55217031c47c0868), c(0, 0x10f68bd621326a4c, 0x15deeeec9f72d14f),
        c(-1, 0xfd085d32a202b69c, 0x9d5843f34531c7fa), c(-1, 0xff00de2c31d68837, 0x75387f69de676b0a), c(0, 0x00221508ed852afd, 0x66ffb20f1b4687ca),
    ],
    [
        c(0, 0x93682a66e896f544, 0xb17821911e71c16e), c(1, 0x48c5365b3fdc3d26, 0xb4ebc08a5f3a2304), c(-1, 0x4a24df27a7a20756, 0x9a140bba6b5f4970),
        c(-1, 0x78cc71998511b1fc, 0x1946893a1b4c7f76), c(0, 0x256483ba9b645383, 0x1d840589c1a42b34), c(0, 0x10ae0793a177362d, 0xea36ff47e2d32e5e),
        c(-1, 0xfcecb148016e7a15, 0x20ca6a80cdc36e1a), c(-1, 0xff0520db4753b0ba, 0x7bf136ba8ab49fd1), c(0, 0x00234a8137bd5916, 0x952d740c85c29628),
    ],
    [
        c(0, 0x987fbfe70b81a708, 0x19cec845ac87a5c6), c(1, 0x42fd29616985e1f3, 0x8497189f38061c65), c(-1, 0x43dca3b0df19f779, 0x7824c35d3cf93e2f),
        c(-1, 0x7b2d171733d41544, 0x319997f4fd57a2dc), c(0, 0x26af31aeddc8b798, 0x7394e2c649bd728d), c(0, 0x1062f0db95138f7c, 0x599e6a2d56d09a8b),
        c(-1, 0xfcd17ec578df01c9, 0x664c9266f0b08d08), c(-1, 0xff098a39e19e3b7e, 0x1bf200758116d3f2), c(0, 0x00247a8857e95fb7, 0xaca015342ee70b90),
    ],
    [
        c(0, 0x9d7fd1490285c9e3, 0xe25e39549638ae68), c(1, 0x3d034df41873e917, 0x1ed93714e2b5625c), c(-1, 0x3db16b3fe70ecc06, 0x63d3f334f56f04c2),
        c(-1, 0x7da237fe929a4b11, 0x4c5575754db58fda), c(0, 0x27f3e88451f119bf, 0x4c6d533e074e03d1), c(0, 0x101553423875d190, 0x0ad195790fceee56),
        c(-1, 0xfcb6c9dcaf679367, 0x6d9df380ae635065), c(-1, 0xff0e1999d93a2f75, 0xb2ee5809f96daaaf), c(0, 0x0025a4ef6c19ce49, 0xc64581345ad6f804),
    ],
    [
        c(0, 0xa267992848eeb0c0, 0x3b5167ee359a234e), c(1, 0x36d88ffc9b45dc9e, 0x6ba97470a1331b7f), c(-1, 0x37a4295abe688496, 0x94a04309b5210455),
        c(-1, 0x802b734be0dc6e25, 0xbc19902d9002cc0c), c(0, 0x2932762868be343f, 0x6226a5b5357400f0), c(0, 0x0fc53abf8891f7b1, 0xde269012e0f8e5fa),
        c(-1, 0xfc9c96abedd82560, 0x4d7f22a9fe199ebc), c(-1, 0xff12ce472a5af127, 0x1d2537769733022f), c(0, 0x0026c988706f1e8f, 0x91dc6e560f06e161),
    ],
    [
        c(0, 0xa73655df1f2f489e, 0x149f6e75993468a3), c(1, 0x307de2ee0e081871, 0x55289a584183b312), c(-1, 0x31b5cce88e3c998e, 0x969b5acae510e8f0),
        c(-1, 0x82c864e1c49d64ac, 0xcf54ec613d38661b), c(0, 0x2a6aa97bc9045df9, 0xe7c339c914ac20d1), c(0, 0x0f72b3ad6a6648ba, 0xa96df91c06b41f83),
        c(-1, 0xfc82e93d7c29fab5, 0x2d0532ce8f5d6953), c(-1, 0xff17a78810a59acf, 0xc4bcd1dc4bbc683e), c(0, 0x0027e8264632380d, 0x619a7f1ca7b1dcad),
    ],
    [
        c(0, 0xabeb49a46764fd15, 0x1becda8089c1a94c), c(1, 0x29f4419fcfad8db8, 0x7f7339115adba722), c(-1, 0x2be7400cd2c44f2d, 0x7a8030e72a3a363d),
        c(-1, 0x8578a598ba9653b7, 0x2fda57983ad52da1), c(0, 0x2b9c5259e2b978d6, 0xf31390fb0f21b269), c(0, 0x0f1dcac5c36703b9, 0x29f2c115c90e7f97),
        c(-1, 0xfc69c5870201e739, 0xdd37bf7a3bc60dae), c(-1, 0xff1ca49d23d667cb, 0x13409e954c62ac79), c(0, 0x0029009cbac99d1a, 0xa70ab22d80d6b27c),
    ],
    [
        c(0, 0xb085baa8e966f6da, 0xe4cad00d5c94bcd2), c(1, 0x233cae26d3bdca9a, 0x42dff2715c13ba33), c(-1, 0x26396803406776fd, 0x875f0eb7d393e7e8),
        c(-1, 0x883bcb4efe611b66, 0x0a4dba600f365858), c(0, 0x2cc741a05b76c05e, 0x459acf832b4340c1), c(0, 0x0ec68d20831c3d83, 0xc01981acf5c1ba7d),
        c(-1, 0xfc512f68ea60d471, 0x6c8375ea3fbfa899), c(-1, 0xff21c4c17544c861, 0x013b6ccebe26b1cb), c(0, 0x002a12c08e8a2ef2, 0x65bfa3c5a140943c),
    ],
    [
        c(0, 0xb504f333f9de6484, 0x597d89b3754abe9f), c(1, 0x1c5831add62e429d, 0xbd5309df3a9b092a), c(-1, 0x20ad24fc6a6ceeb0, 0x2867203bb8117bcd),
        c(-1, 0x8b1168f8e82de92b, 0xdae4bed80cc10e74), c(0, 0x2deb49365329673c, 0xbd0a522a291fe3ee), c(0, 0x0e6d08319e3f6783, 0xae046e5494a2db9c),
        c(-1, 0xfc392aadca9aa199, 0x45b29949ae9fd31d), c(-1, 0xff27072aae4190cd, 0xc30115dee9cd976f), c(0, 0x002b1e677b627bb5, 0x7879fab08db2b114),
    ],
    [
        c(0, 0xb96841bf7ffcb21a, 0x9de1e3b22b8bf4db), c(1, 0x1547dc4c7789e79a, 0x14c999e1446d9931), c(-1, 0x1b4351fb30c44eec, 0x4103318c5f730712),
        c(-1, 0x8df90eb1bd7dcd58, 0xe6c05bcee9f1e660), c(0, 0x2f083c137fd3164e, 0x94c591b665681dd9), c(0, 0x0e1149c6fba8347d, 0x7bdbddef86dfbad9),
        c(-1, 0xfc21bb09ccaaf830, 0x1bbff727cfe26be1), c(-1, 0xff2c6b092f4a94b1, 0x82210629736ed4e8), c(0, 0x002c23683b5f8f18, 0x5a981eaa10b98d01),
    ],
    [
        c(0, 0xbdaef913557d76f0, 0xac85320f528d6d5d), c(1, 0x0e0cc4dd47b5446b, 0x5c062622584277b3), c(-1, 0x15fcc4b2fa3d88e4, 0x373f7dbac24a5e22),
        c(-1, 0x90f249ccf24a8499, 0x3fb6df9c57825c94), c(0, 0x301dee471f41afdc, 0x6160c8030e15ab65), c(0, 0x0db36006535ac045, 0x8a38fac7395a64ee),
        c(-1, 0xfc0ae41a1cff295a, 0xfa6bd3c787cd538d), c(-1, 0xff31ef88300edf2d, 0xe062be231a0ba6c2), c(0, 0x002d219a8f0a4465, 0x95fdfaa240092e79),
    ],
    [
        c(0, 0xc1d8705ffcbb6e90, 0xbdf0715cb8b20bd7), c(1, 0x06a808d2c5c7730f, 0x522fe8d543f4261b), c(-1, 0x10da4d66c063ab63, 0xe0fd55dd4de003fa),
        c(-1, 0x93fca4e7d7f24fd6, 0xe0fe9feb6023a172), c(0, 0x312c34febdac3514, 0x17ef8a4e386aca2b), c(0, 0x0d53596b000b02da, 0x5c31381a16f35bfd),
        c(-1, 0xfbf4a9645bcba010, 0xd01ab64040c05833), c(-1, 0xff3793cde03e97cb, 0xbecc650d25ea577c), c(0, 0x002e18d7439c1e95, 0x12d45983ef851051),
    ],
    [
        c(0, 0xc5e40358a8ba05a7, 0x43da25d99267326b), c(0, 0xff1acc0b5b9970ca, 0x3163b9fbffeaf8dc), c(-1, 0x0bdcb6c8f20fb44a, 0x88675e7c406c1198),
        c(-1, 0x9717a7fbb72dc7c8, 0x621e239f7186afa4), c(0, 0x3232e68cd0295168, 0xa3bc11e490efec23), c(0, 0x0cf144c3c36badf3, 0x4faddba270afc777),
        c(-1, 0xfbdf0e561202e800, 0xb3cfe6f43ce09a87), c(-1, 0xff3d56fb892184db, 0x66f43cb73467ee65), c(0, 0x002f08f8390ab176, 0x621b1c167660b9d2),
    ],
    [
        c(0, 0xc9d1124c931fda7a, 0x8335241be1693225), c(0, 0xf76638a45bd5762e, 0x13c41a661d9730f7), c(-1, 0x0704c5dc31a7370e, 0x97e43b1279762183),
        c(-1, 0x9a42d870524517f0, 0x1cb9992f42e23dc8), c(0, 0x3331da6f21fade63, 0x1f5e24ab61b74651), c(0, 0x0c8d31307da09d5f, 0xe4a79151dcf5229a),
        c(-1, 0xfbca16442a03b9ce, 0x9ee5612cabfa473c), c(-1, 0xff43382dafeefd60, 0x969cfde77d322cd4), c(0, 0x002ff1d867e8ad4f, 0xbfaa5eca7cbf7de8),
    ],
    [
        c(0, 0xcd9f023f9c3a059e, 0x23af31db7179a4aa), c(0, 0xef8b7ecc09771025, 0xa52661ac6cf4132f), c(-1, 0x025339d4f3d8c112, 0x450f373799b706aa),
        c(-1, 0x9d7db92ecca9f97c, 0x09ab6a0cbe916fd4), c(0, 0x3428e95513b0a983, 0xf78caa04cc8fcf2f), c(0, 0x0c272e1fd82efe48, 0xf7617f6cbab38874),
        c(-1, 0xfbb5c46a6c12ea9b, 0x6841ab99655740d9), c(-1, 0xff49367c38e1fec7, 0xc66a8909ae43431e), c(0, 0x0030d353e71ba4db, 0xf7ab7242c817fc67),
    ],
    [
        c(0, 0xd14d3d02313c0eed, 0x744fea20e8abef92), c(0, 0xe78bd492afd2bc6d, 0xb58938d12b4689c6), c(-2, 0xfdc8cbfc03854674, 0x023c6542703e8e7c),
        c(-1, 0xa0c7cab4f50c23ce, 0xa4bb526bdb841ce0), c(0, 0x3517ed25ab2be405, 0x18fd19fe0d02c044), c(0, 0x0bbf4b4ce4c73f34, 0x245874026c380140),
        c(-1, 0xfba21beafeb586ee, 0x2385ee905ca8f8cc), c(-1, 0xff4f50fa8b03fd9e, 0xede002426a8c4684), c(0, 0x0031ad47f165ac3d, 0x94e580c20d833729),
    ],
    [
        c(0, 0xd4db3148750d1819, 0xf630e8b6dac83e69), c(0, 0xdf6875bad260b95b, 0xe25a7b6c7eb9500c), c(-2, 0xf9662f91ef628af9, 0x2b53fba9d8cf8329),
        c(-1, 0xa4208b28eeeeb8e6, 0x0ed52f7e70ce9974), c(0, 0x35fec1057393e887, 0xd14798d92c5a7f07), c(0, 0x0b5598bcb046ba45, 0xc882e762735bc68d),
        c(-1, 0xfb8f1fcdeafec815, 0xb6570b97f2f3579d), c(-1, 0xff5586b7b4a8ec5e, 0x7a1d5ccb69e0b4f2), c(0, 0x00327f92eac1f64c, 0xb90845c2d796fe46),
    ],
    [
        c(0, 0xd84852c0a80ffcdb, 0x24b9fe00663574a4), c(0, 0xd722a3887baa88b9, 0x2dcb864886dde369), c(-2, 0xf52c11b365be7028, 0x66969bc756520d0d),
        c(-1, 0xa787766d38b679af, 0xe86d557fe7d3b083), c(0, 0x36dd415c2c546bda, 0x620b1ab54b3117bb), c(0, 0x0aea26bbca50dc5d, 0xc067a9866408d07e),
        c(-1, 0xfb7cd300a4e4f711, 0x184563c5366b2b67), c(-1, 0xff5bd6be9096d7fb, 0x8255c33a5d5fa942), c(0, 0x00334a1465939c95, 0xb1a293e9c8b4f07d),
    ],
    [
        c(0, 0xdb941a28cb71ec87, 0x2c19b63253da43fc), c(0, 0xcebba48fb2dd5250, 0x3faeb5b92bb6ef60), c(-2, 0xf11b193e82a65932, 0x52da2e226fcfb666),
        c(-1, 0xaafc06350b1a4be3, 0x58eee6ad1772da10), c(0, 0x37b34bda4644bae5, 0xe181ad9ecd1a5e20), c(0, 0x0a7d05dbc1e14e06, 0x730d50aacc030ee3),
        c(-1, 0xfb6b385597afb113, 0x568d92897d89b821), c(-1, 0xff624015ebd35f86, 0xb37e2674e1aff895), c(0, 0x00340cad27a5c56f, 0xb1b1023cc773d07d),
    ],
    [
        c(0, 0xdebe05637ca94cfb, 0x4b19aa71fec3ae6d), c(0, 0xc634c4821fa4d73f, 0x584d0c539c98ddeb), c(-2, 0xed33e6b91490748b, 0xf3d8f93d8419502d),
        c(-1, 0xae7db2190ed1d26a, 0x57aa79ae7e3aab29), c(0, 0x3880bf7e2e1f5752, 0xd49ffa303e75ec92), c(0, 0x0a0e46f0973a567f, 0x6855b5ce7efac2e4),
        c(-1, 0xfb5a5283b6915fe6, 0x9fb33ee2d06e7730), c(-1, 0xff68c1c0ac113288, 0x08bfe0e89488e0a6), c(0, 0x0034c73f2efc62c3, 0xf9a8f792ccdfacdf),
    ],
    [
        c(0, 0xe1c5978c05ed8691, 0xf4e8a8372f8c5810), c(0, 0xbd8f53fbe412fdfa, 0x8e2ca03979bcdc16), c(-2, 0xe9771437db7eb7e2, 0x65a8b9ef91c2faa9),
        c(-1, 0xb20befac65508cd7, 0xade17742e33d57d7), c(0, 0x39457c996379155a, 0x8f2f2d177f19da10), c(0, 0x099dfb0e23945531, 0x8425f27c8d6019a2),
        c(-1, 0xfb4a2426117d13e0, 0x3fde81b501472db9), c(-1, 0xff6f5abdf6b7a91a, 0x21726a951c50a42c), c(0, 0x003579adb674cb6d, 0x0ab5edc498cd6f32),
    ],
    [
        c(0, 0xe4aa5909a08fa7b4, 0x122785ae67f5515d), c(0, 0xb4cca84fb4772337, 0x1feccb286ae0782a), c(-2, 0xe5e53546c66cbb2f, 0x54cd1f4018d562aa),
        c(-1, 0xb5a63292014f23ed, 0x4f8e0020fb03860f), c(0, 0x3a0164d55b6ece58, 0x4976deb104170cc0), c(0, 0x092c338576f4c252, 0x3bea8a43b3b74ec7),
        c(-1, 0xfb3aafbb6e4945df, 0xf6790d9c89b5ba8e), c(-1, 0xff760a09587e7104, 0xade7d5215b3fecce), c(0, 0x003623dd3a357882, 0x24f8fe8aecb33fa7),
    ],
    [
        c(0, 0xe76bd7a1e63b9786, 0x125129529d48a92f), c(0, 0xabee1b52352648e7, 0x154704bf598710b8), c(-2, 0xe27ed6d232b26926, 0x4aaa14cc09b44426),
        c(-1, 0xb94bec924bd83ac8, 0x1ff3e0e072a4cef6), c(0, 0x3ab45b382e48cbc5, 0x7cf8bd596a30a959), c(0, 0x08b901e22c94ac26, 0x5bbad0c59058d2b1),
        c(-1, 0xfb2bf7a5e62f5e11, 0x30e9da74158061b7), c(-1, 0xff7cce9aed97343f, 0xac46d3336f0ff878), c(0, 0x0036c5b37bec376c, 0x1ee739116aa14c8b),
    ],
    [
        c(0, 0xea09a68a6e49cd62, 0x15ad45b4a1b5e823), c(0, 0xa2f50b24a651ed5f, 0xc3a62c35001d8968), c(-2, 0xdf447f1130ddb400, 0x0cf355381f0daa41),
        c(-1, 0xbcfc8db112824fc8, 0xcfae7105c12ae20b), c(0, 0x3b5e44290f5b3c23, 0x2f483f0e2f303f9e), c(0, 0x084477e7b6401af8, 0x44527ca21e0461af),
        c(-1, 0xfb1dfe2a87b72fee, 0xab35074039d901e8), c(-1, 0xff83a7678a5f0764, 0x8b73ce29ade55053), c(0, 0x00375f1786da2944, 0x73f37fa9fdd6b204),
    ],
    [
        c(0, 0xec835e79946a3145, 0x7e610231ac1d6181), c(0, 0x99e2d9fee626c551, 0x6b2963f0bc813947), c(-2, 0xdc36ad70d25d2bf5, 0x6679bd8e41d68f85),
        c(-1, 0xc0b78443bb74ef97, 0x01fdc78a4c52b2ed), c(0, 0x3bff05748e734da2, 0x79fc0462a8d3cf40), c(0, 0x07cea78e9f192a37, 0x7ce124729d0b7af4),
        c(-1, 0xfb10c570fd1ced7b, 0x4bf9cd00a9e61cb2), c(-1, 0xff8a9360e49159a2, 0x23ec1eecbfe611d0), c(0, 0x0037eff1b3acefbd, 0x0cec3c83946e1c19),
    ],
    [
        c(0, 0xeed89db66611e307, 0x86f8c20fb664b01b), c(0, 0x90b8edf8d186bf1e, 0xd04744abc44947f1), c(-2, 0xd955da80832c7ebd, 0x586d41cdb82a7911),
        c(-1, 0xc47c3d07bbccb961, 0xc340288de61aaa9d), c(0, 0x3c968650a228efe2, 0x93a5aae7ee8d4615), c(0, 0x0757a301c62af921, 0x0e9628b89e463bcc),
        c(-1, 0xfb044f83373f62d8, 0xb088af6592b94794), c(-1, 0xff919175bcf60bd0, 0x080274e404d67480), c(0, 0x0038782bac246fa5, 0x8b47f5b86f1e9835),
    ],
    [
        c(0, 0xf1090827b43725fd, 0x67127db35b287316), c(0, 0x8778b0d30bca9960, 0x4c1bb57799fdbde3), c(-2, 0xd6a277df728a9367, 0xfb14497fe7a2eeda),
        c(-1, 0xc84a23394ce7776f, 0x7156cb5521ed90f5), c(0, 0x3d24af607a75bd86, 0x68720de365f3ce0f), c(0, 0x06df7c9b9139d88c, 0xf94b646b9fbaca86),
        c(-1, 0xfaf89e4d1d239878, 0x0aa8098a25f958d5), c(-1, 0xff98a09209844140, 0x0a7e63acee4bb44c), c(0, 0x0038f7b06e849910, 0x94a505a5f056f770),
    ],
    [
        c(0, 0xf314476247088f74, 0xa5486bdc455d56a2), c(0, 0x7e238fbf360eed17, 0xcfff00f69e8e2568), c(-2, 0xd41cf02b0d972a56, 0xb7f7216c7d07518a),
        c(-1, 0xcc20a0aa5d17dbbb, 0x8f0db7b4fa119301), c(0, 0x3da96ab81afa2667, 0xfbb0a9795b5f3e5f), c(0, 0x066646e3183f4ddb, 0x507c3f0b5d74420b),
        c(-1, 0xfaedb39c401a4530, 0x434064a9a44c4642), c(-1, 0xff9fbf9f1ff36aec, 0xf1eaf579c565ea44), c(0, 0x00396e6c50d2ad1f, 0x840308e3a553ea00),
    ],
    [
        c(0, 0xf4fa0ab6316ed2ec, 0x163c5c7f03b718c5), c(0, 0x74bafb279ea6d2af, 0x94f08e374519a216), c(-2, 0xd1c5a6ee8e8bac4d, 0xf37bd467dce385c0),
        c(-1, 0xcfff1dd9b8374749, 0x866163319d975683), c(0, 0x3e24a3dfbc62a279, 0x1537d85e27867afd), c(0, 0x05ec14894a01a44b, 0xf77eb350adf092b0),
        c(-1, 0xfae3911f9492c2a8, 0xb29b94a8aa9a2c8e), c(-1, 0xffa6ed83e0b3fca5, 0xe670d02b64ef6da7), c(0, 0x0039dc4d03dd8193, 0xc64df316fb319ff1),
    ],
    [
        c(0, 0xf6ba073b424b19e8, 0x2c791f59cc1ffc23), c(0, 0x6b40667671633bdc, 0x4724133ff3e4a110), c(-2, 0xcf9cf893a3182c2f, 0x1275c8f0e48855b0),
        c(-1, 0xd3e5020a64836561, 0xba85ea2a4ec89d0d), c(0, 0x3e9647d6f4677a98, 0x4f01e4176b5a271e), c(0, 0x0570f8660a37d621, 0xe6a1cd29713bfbd8),
        c(-1, 0xfada38672fa67dde, 0x5ab5e3b0f7825e09), c(-1, 0xffae2924e2492bd9, 0xdef209f90793208d), c(0, 0x003a414196104a71, 0xc00d7513c9177578),
    ],
    [
        c(0, 0xf853f7dc9186b952, 0xc7adc6b4988891bb), c(0, 0x61b547dc7171b8aa, 0x71a0d962f1c0e47c), c(-2, 0xcda33a542c429367, 0xdd46433066ef18dd),
        c(-1, 0xd7d1b35b302d5376, 0x90f3ba600ce02b00), c(0, 0x3efe4517a3ea8e6d, 0x37498569ad9c625d), c(0, 0x04f5057549ab95a4, 0x6b6f6ccb648f8bd9),
        c(-1, 0xfad1aae40967232e, 0xe420a2b351f2397b), c(-1, 0xffb571649cfd08af, 0x9f4d12d2bfbcad79), c(0, 0x003a9d3a760f7a40, 0x27bf4392063eea45),
    ],
    [
        c(0, 0xf9c79d63272c4628, 0x4504ae08d19b2980), c(0, 0x581b181745a7a057, 0x9a6d0622c5582da1), c(-2, 0xcbd8ba2d19fa8830, 0xd8b8cf5d232d34b9),
        c(-1, 0xdbc496de6bf88c2f, 0xa247a89a8bc9c79b), c(0, 0x3f5c8b98aabf6b60, 0x84548d0588c3705b), c(0, 0x04784ed418cc2b36, 0xae719ab34cccdb4d),
        c(-1, 0xfac9e9e7c3f90965, 0x66ba9f9f74f4c32d), c(-1, 0xffbcc52396e83428, 0x0be76c6eed959006), c(0, 0x003af029751f51be, 0xfe06ffc0ee3c53b9),
    ],
    [
        c(0, 0xfb14be7fbae58156, 0x2172a361fd2a722f), c(0, 0x4e735237601f7c49, 0x16a9d0d68a7ab95a), c(-2, 0xca3dbed26468dd00, 0xf0796201676fa43f),
        c(-1, 0xdfbd10b1cf40d93a, 0x7bf7b2c8fe879770), c(0, 0x3fb10cd060b3079d, 0xecfedf7e97bb80bc), c(0, 0x03fae7bdb525b933, 0x5ec6236fa5a44403),
        c(-1, 0xfac2f6a47782a1de, 0x40089def5e7d77f9), c(-1, 0xffc4234090466923, 0xd3ecff822edf699e), c(0, 0x003b3a01c953c051, 0x7243a5c429045824),
    ],
    [
        c(0, 0xfc3b27d38a5d49ab, 0x256778ffcb5c1769), c(0, 0x44bf73658a1e19e2, 0x1458bd291f7f499a), c(-2, 0xc8d287a424d548e8, 0xcc1826729cb11fd2),
        c(-1, 0xe3ba841681b82d14, 0x922f0966dde30431), c(0, 0x3ffbbbb6d3718358, 0xffcf57bbb8a28498), c(0, 0x037ce38892313fdd, 0xe004c77e6a141848),
        c(-1, 0xfabcd22c82f8f516, 0x1623356c7550e33f), c(-1, 0xffcb8a98b011024c, 0xb90bf429ecff0923), c(0, 0x003b7ab80f893ec4, 0xc49d39fa533ea9e3),
    ],
    [
        c(0, 0xfd3aabf84528b50b, 0xeae6bd951c1dabbe), c(0, 0x3b00faa81d42ccc2, 0xccb213fc16f3c56e), c(-2, 0xc7974ca4cfd0cf9e, 0xc08304c02454ebc6),
        c(-1, 0xe7bc538947277505, 0x3eb180155ffdc288), c(0, 0x403c8cc7c8f170e7, 0xa461500c200a54cc), c(0, 0x02fe55a35df2736c, 0xa18bbef049178204),
        c(-1, 0xfab77d7261d072fa, 0x124e97952f7564e4), c(-1, 0xffd2fa07b0d89c17, 0xdc8863d20245e329), c(0, 0x003bb2424d26569a, 0x4959d02a8f8d248f),
    ],
    [
        c(0, 0xfe1323870cfe9a3d, 0x90cd1d959db674ef), c(0, 0x313968a7f3132bed, 0xee65e9b258d62f67), c(-2, 0xc68c3e709226a4bc, 0x312cb787520682a1),
        c(-1, 0xebc1e0dac97834d6, 0x8a5a03ac801559d7), c(0, 0x4073760486155043, 0xd87223d9aa3c2898), c(0, 0x027f519201d91bd5, 0x0b7d433ed22c37f2),
        c(-1, 0xfab2f94886989d31, 0xf49190f067869424), c(-1, 0xffda70680dd6e85b, 0x205b4e88941faf06), c(0, 0x003be097f1a59082, 0xc54d422c33399b85),
    ],
    [
        c(0, 0xfec46d1e89292cf0, 0x41390efdc726e9ef), c(0, 0x276a3f7513fdef77, 0x9a3fb4ee23bd4121), c(-2, 0xc5b18635d1e87ee7, 0x464fa63142583061),
        c(-1, 0xefca8d47fd481257, 0x0dee86f27f0090e2), c(0, 0x40a06ef5593d22c0, 0xa069a27d5a5c1bd0), c(0, 0x01ffeaeaa05c497f, 0x2292114ddc8da8fe),
        c(-1, 0xfaaf46613a884f7d, 0xa980868f845c8b04), c(-1, 0xffe1ec933031c045, 0x57da8193e433069e), c(0, 0x003c05b1d7e78d4c, 0x1fb75ee937ea7a4b),
    ],
    [
        c(0, 0xff4e6d680c41d0a9, 0x0f668633f1ab858a), c(0, 0x1d95024b2efa87fa, 0x7a895b6d6a57d061), c(-2, 0xc50745aed4be444a, 0x35e503aa8ae51da7),
        c(-1, 0xf3d5b9929d435f06, 0xcf618aae1ef66a89), c(0, 0x40c370aae88b3ec8, 0x155a39899483dc73), c(0, 0x018035528fc62b46, 0xe9f4b4d1af31a0a1),
        c(-1, 0xfaac654e81ffa73d, 0x74237500f1459063), c(-1, 0xffe96d619c6879f1, 0x0c37221f87819bb2), c(0, 0x003c218a474d151e, 0x886f6cb3cd358d79),
    ],
    [
        c(0, 0xffb10f1bcb6bef1d, 0x421e8edaaf59453e), c(0, 0x13bb3555e2f39392, 0xb41b4761828ea246), c(-2, 0xc48d971c8c73c0be, 0x2ba25945ac35e1e9),
        c(-1, 0xf7e2c619b8802b26, 0x2ffa0d63d0e3233b), c(0, 0x40dc75bf43a8d7e4, 0x580fd08a5530437f), c(0, 0x0100447b52a7c11f, 0xb34f9e043eede2ee),
        c(-1, 0xfaaa56820603c773, 0x99b10b5b2105084b), c(-1, 0xfff0f1ab1fe48045, 0x29bb2a0e3a1cf3d8), c(0, 0x003c341cf498f18a, 0x5dee26999c3d5884),
    ],
    [
        c(0, 0xffec4304266865d9, 0x5657552366961732), c(0, 0x09de5d74e331743a, 0x838a9a887f148bcf), c(-2, 0xc4448d428a91b66c, 0x5b8d86bc603febbd),
        c(-1, 0xfbf112f250107f3b, 0x6e29534e6524586f), c(0, 0x40eb7a56b8e003b3, 0xe745ed518a151440), c(0, 0x00802c1f8e6c0338, 0xddf25e6812ae1d69),
        c(-1, 0xfaa91a4d02b7f21e, 0xfc916dea5d8249b9), c(-1, 0xfff87846fea62667, 0x045b35dbf7985574), c(0, 0x003c3d6702996f93, 0x00801eee9460c2e9),
    ],
];

/// `atan(z)` for `z` in `[0, 1]`.
#[rustfmt::skip]
pub(crate) static ATAN_POLY8_LUT64: [[Scalar192; 9]; 64] = [
    [
        c(0, 0x0000000000000000, 0x0000000000000000), c(0, 0xfffffffffffffffc, 0x73ef7080464c6b44), c(0, 0x0000000000002621, 0xe654e7b11fdb4dc0),
        c(-1, 0xaaaaaaaaaa319cc6, 0x2708737760a5e01a), c(0, 0x00000000ae478746, 0xb7fefe0c1639bde3), c(0, 0x333332ad095a8471, 0x44edbd9313296547),
        c(0, 0x00003affbe8d3a3b, 0x019364daa93d8a51), c(-1, 0xdb5ed95e4259de75, 0xc0ad7acb1c467047), c(0, 0x01ff7413c1ee0710, 0x71e6d8f5ff162c21),
    ],
    [
        c(0, 0x03ffeaab776e5356, 0xef9e31590057dd81), c(0, 0xfff000fff000ffec, 0x87d05100d83f0903), c(-1, 0xfc007ff401001158, 0xf23ada7c5bf111bf),
        c(-1, 0xaacaa5ab3f7a726b, 0xb2c3124d9e8d867b), c(0, 0x03fec038a339c94c, 0x891a38e01ee31157), c(0, 0x330340ad1b613efe, 0xa29beb519c034ac4),
        c(-1, 0xfc028e85fd961f37, 0x274f8924482b6996), c(-1, 0xdb9f0240ee2b2601, 0xa29225dba7d13a91), c(0, 0x05f32872337f673c, 0x3835e248b10a2bfe),
    ],
    [
        c(0, 0x07ff556eea5d892a, 0x13bcebbb6ed46311), c(0, 0xffc00ffc00ffc00c, 0xa8f80f57746aca73), c(-1, 0xf803fe807fd82fba, 0x4be88d44cef215a1),
        c(-1, 0xab2a5acff0940000, 0xa41bbfa1b036ec1c), c(0, 0x07f606fce52e19f3, 0xf8b4855032f729d0), c(0, 0x3274120da94272a9, 0x5ad4e546a726485a),
        c(-1, 0xf812cd2b3578db69, 0x73fd6127bb4955eb), c(-1, 0xdc5dda30f1a0fbcc, 0x53405caec4d9f223), c(0, 0x09c59d6378f126d6, 0x620bb97dfdb646db),
    ],
    [
        c(0, 0x0bfdc0c2186d14fc, 0xf220e10d61df56ec), c(0, 0xff7050d289929d84, 0x49045788384d4d15), c(-1, 0xf40d74a4850270b3, 0x050ea1785dd7f51b),
        c(-1, 0xabc917526b0dd922, 0xd0dd51df6dd662b0), c(0, 0x0bde74e8c81224b5, 0x1d385264a6e56cd3), c(0, 0x3187994dbc8fef72, 0xa8cd9e47a5cd4b92),
        c(-1, 0xf43e957a675f8cad, 0xe800150a250e085e), c(-1, 0xdd97359867cf6efe, 0x46089eaef258927a), c(0, 0x0d61d7002212588a, 0x3a81975924bf723d),
    ],
    [
        c(0, 0x0ffaaddb967ef4e3, 0x6cb2792dc0e2e0d5), c(0, 0xff00ff00ff00fefe, 0x2cac24203ac965fa), c(-1, 0xf01fd03fb05faed6, 0x7ca0c17b5a1af897),
        c(-1, 0xaca5b3f115817397, 0x4dbbbc037c27247b), c(0, 0x0fb0de23f538d6b2, 0xf6991541c4541269), c(0, 0x3041092a5a157921, 0x7cf5516aeac23433),
        c(-1, 0xf092ecb40630eaa5, 0xa837beb220bc5114), c(-1, 0xdf4447c3d9c38632, 0x0a1e919a09782951), c(0, 0x10b490ffc33624a7, 0xc798f65bf881609d),
    ],
    [
        c(0, 0x13f59f0e7c559d6b, 0x1338a177e11cd9bf), c(0, 0xfe726d355c9f471e, 0x60d9ad8230828d8c), c(-1, 0xec3deeb2dd49e5d9, 0x3663fcf4bd9fddfb),
        c(-1, 0xadbe98eca2aa5ad1, 0xa19844ba110d7978), c(0, 0x136662c103bae95c, 0x403e5282729103b6), c(0, 0x2ea4c2e41ad9261d, 0x6cf0952a72d06c61),
        c(-1, 0xed1bf8413741ae7c, 0xc16dd78656af6014), c(-1, 0xe15bda1092e1f232, 0x5269413eb8a87a03), c(0, 0x13acd38030e0f485, 0x75b3853d38e4495f),
    ],
    [
        c(0, 0x17ee182602f10e8c, 0x126acfcf099f06cf), c(0, 0xfdc504b567d65dab, 0x205c5dc4e3eca137), c(-1, 0xe86a97b99ca38e03, 0xceebe5a3a3e5c574),
        c(-1, 0xaf11c37f20d1d446, 0x4cb03890404f4706), c(0, 0x16f8857968536514, 0x329d55b90819885c), c(0, 0x2cb83e382378f5b4, 0x0060a95fd2e66c0d),
        c(-1, 0xe9e4be3199b61188, 0xdd4a53b15db3818e), c(-1, 0xe3d295c20fc891c5, 0xf5cacba7a94c895b), c(0, 0x163c6e99a5114265, 0x3d049a2a9c162de2),
    ],
    [
        c(0, 0x1be39ebe6f07c37d, 0xee3ca681661cbb3e), c(0, 0xfcf9449ddc8c9180, 0xb14059a0f3d48482), c(-1, 0xe4a8788d8a68d16c, 0xe5584e59bad98e5a),
        c(-1, 0xb09cccae90cc1b7f, 0x1c575978bd9692ce), c(0, 0x1a61404ff6464162, 0x07f089af26c9fefb), c(0, 0x2a81ebcc90e25e9e, 0xeee599d14ef59431),
        c(-1, 0xe6f6eea137fa6f2c, 0x20226779ae0ff453), c(-1, 0xe69b5d541ca0699d, 0xd83aaf6c89a4eedf), c(0, 0x1858581183006c52, 0xdc0112a085660eaa),
    ],
    [
        c(0, 0x1fd5ba9aac2f6dc6, 0x5912f313e7d111df), c(0, 0xfc0fc0fc0fc0fc0e, 0x8158183db429cbe8), c(-1, 0xe0fa1f62f23ef259, 0x56cd913f54ebbb44),
        c(-1, 0xb25cf156244de911, 0xb0e8245ce3be0bd5), c(0, 0x1d9b16b3cf79f4c0, 0x51411593bcd02954), c(0, 0x280912f8cf78e388, 0x2813a19af5ff490b),
        c(-1, 0xe45ab783a23a08c6, 0xb96deab62a57804f), c(-1, 0xe9a7b188fdfa7d88, 0xc521ef4ec3c855aa), c(0, 0x19f8e8203c24b60d, 0xa9dccfaff2a07fa0),
    ],
    [
        c(0, 0x23c3f5f6086e4dc9, 0x6f4dd64a60e82be6), c(0, 0xfb0921c50a7af198, 0x1c5e1a998e122d80), c(-1, 0xdd61f74c580910f0, 0x8bda0e498b916ca1),
        c(-1, 0xb44f1b3b7977abcb, 0x64483837430468d4), c(0, 0x20a124d10e9734a9, 0x9c23cbc62ce13b63), c(0, 0x2555abf0f22ba744, 0xa12428109dced24e),
        c(-1, 0xe216a3e2fe11ca3c, 0xfa707a37675b921a), c(-1, 0xece81e116ceb44d8, 0xaf5370402db4c430), c(0, 0x1b19f3fde3bdd8e1, 0xfe3e22897a0ecdb2),
    ],
    [
        c(0, 0x27adddd18cc4d8b0, 0xd1d8674940d83fa1), c(0, 0xf9e621ad8389e239, 0xb8e35536cdfa78ba), c(-1, 0xd9e244905d2c24ba, 0x7cedc23ff78e8426),
        c(-1, 0xb66feb00a746ac2e, 0xe32b3ff61f873bfe), c(0, 0x236f2bd1dd09ec4a, 0x1723fd71e83b2e39), c(0, 0x2270376f030aae48, 0xc2e0c3e9bf911388),
        c(-1, 0xe02f872c07399527, 0xf974c2c5028bf981), c(-1, 0xf04ca982ca91eaab, 0x2b7e835f33374967), c(0, 0x1bbac6a692af591b, 0xa2ba51274c8c5e49),
    ],
    [
        c(0, 0x2b93023c7d84d3be, 0xad534ffbc30b7a65), c(0, 0xf8a78ce671475490, 0x8d16a9c43d2595fb), c(-1, 0xd67d217b30e5f1c1, 0x6643528091ef340b),
        c(-1, 0xb8bbc2c0ccfcf48b, 0x847f5ebec808cfe7), c(0, 0x26019ae92c33a5ec, 0xcfc0afb73b94b275), c(0, 0x1f6194fe017df667, 0x73c80530df32561b),
        c(-1, 0xdea874a8adbaf18e, 0x81215ab832c24659), c(-1, 0xf3c5445e82aeb41d, 0xd521545d6f2d4793), c(0, 0x1bddf9e7c2b6b417, 0x116fcd5653e1c83f),
    ],
    [
        c(0, 0x2f72f6979cb6044d, 0x1ec2d3e207271d22), c(0, 0xf74e3fc22c700f75, 0x5d658923e2d79a1b), c(-1, 0xd3347bb252c2248c, 0xab3b4631c4609f1d),
        c(-1, 0xbb2ed123206c46e8, 0x1c4c345365fa7342), c(0, 0x285595170e3f3e93, 0xc9ecec8c2a97f1ce), c(0, 0x1c32d907f74aee48, 0xb06645e0ad36306f),
        c(-1, 0xdd82c2d8191eaeb4, 0x322c191bbe4fa0aa), c(-1, 0xf7423330624ebf5b, 0x35f6e8f34a2dac79), c(0, 0x1b893331df1299c2, 0x3cc286e0f8a420de),
    ],
    [
        c(0, 0x334d51d2d90c4c39, 0xec03cf68691bbacf), c(0, 0xf5db25464996b809, 0x027bd899f14da120), c(-1, 0xd00a120efad3fa24, 0xd6a696d9b6d012d9),
        c(-1, 0xbdc51cb0299ade26, 0x2b22b9e9829620bb), c(0, 0x2a68f3acd93eba36, 0x55c2032d7a072573), c(0, 0x18ed23bbe89f8842, 0x287be2c4709c397f),
        c(-1, 0xdcbe19e9b2893342, 0xd8514b91f698a8f7), c(-1, 0xfab47039e14fcc6f, 0x7ebfb1a2fef11795), c(0, 0x1ac4c8ca76edd887, 0x0f956e532a722cc7),
    ],
    [
        c(0, 0x3721aea524c14408, 0xbd88697072d54bc1), c(0, 0xf44f35ae678b9241, 0x98ad158b31fc61ef), c(-1, 0xccff73010c804752, 0xcc52b4140e30676f),
        c(-1, 0xc07a8f35e5c23c42, 0xcdbdfb235c175e58), c(0, 0x2c3a45ac1223b83d, 0xadd557150b61017f), c(0, 0x159979ca85ff78d8, 0x93ea5630958e61e4),
        c(-1, 0xdc588c45e8d83961, 0xfe04340556b92088), c(-1, 0xfe0e01b4d4b4aa2a, 0x608477397163f7fe), c(0, 0x199b54c741709ccf, 0x94b966a3fa53dd84),
    ],
    [
        c(0, 0x3aefabbe40ae6ce3, 0x2468a9a2cbef5e3a), c(0, 0xf2ab74e436be2d9f, 0xf29ddde79a97deee), c(-1, 0xca15fb7a1de6de1d, 0x6d61358b9800c521),
        c(-1, 0xc34b0109d5044220, 0xa83dc8dc14def172), c(0, 0x2dc8cc2deaca5081, 0x89a0e5264018dbee), c(0, 0x12409fdaf13172a7, 0x88e18d85d2bb236c),
        c(-1, 0xdc4eb7c60a15562a, 0xc0e6f171756ef506), c(0, 0x01424265f5093f6d, 0xa472d8db7c74ed43), c(0, 0x18193baae2a5fcbb, 0x5adb0690f19ad68a),
    ],
    [
        c(0, 0x3eb6ebf25901bac5, 0x5b71e7bd7de885f9), c(0, 0xf0f0f0f0f0f0f0f2, 0xa521fa0e5e62d49f), c(-1, 0xc74ed65de56ce22c, 0x5447425943a6345c),
        c(-1, 0xc63243fb58951992, 0x20e9d3edadbf30d2), c(0, 0x2f1474115d91174c, 0xa304907f0c93554c), c(0, 0x0eeaf9755acd6c70, 0x5a9f662364f2756f),
        c(-1, 0xdc9bee06f7997d14, 0xf91e99d8b94f3b8e), c(0, 0x04461af3a6129a2b, 0x73e1e381a48dcaa8), c(0, 0x164c2c93399aeae7, 0x3901cc6eae4a4d07),
    ],
    [
        c(0, 0x4277165f618d8962, 0xe47390cb8655e9d1), c(0, 0xef20c06c5ad7311b, 0x0d91689abc84fced), c(-1, 0xc4aafc7354b4c060, 0xd11143fae045f67f),
        c(-1, 0xc92c2dcd1645a27f, 0x651d18a25b278db2), c(0, 0x301dcd3b3d8cdabd, 0x9267048a874f4b1b), c(0, 0x0ba06bf9a48278c2, 0xdf7174d37837e1db),
        c(-1, 0xdd3a622192f09719, 0xe3b6c1e5975e4544), c(0, 0x07102b3430b3235c, 0xeee43673e89cbc2b), c(0, 0x1442a0ad0cb70e63, 0xf8d709e6d40713a3),
    ],
    [
        c(0, 0x462fd68c2fc5e098, 0x6523a458dfc414c7), c(0, 0xed3c00ed3c00ed3e, 0x07b66c575ad4360f), c(-1, 0xc22b34cfd669c7b9, 0x6427adb37961b868),
        c(-1, 0xcc34a2112105de99, 0xe05538d6bd17a043), c(0, 0x30e5ffbdae978866, 0x2d42abac7a0fd51f), c(0, 0x0868460e7c08f300, 0x8f465ef671fb4c1f),
        c(-1, 0xde235a0746911057, 0xbcfd9ef93a3e8e4a), c(0, 0x0998e35dc0ddee97, 0xb9b22035790adac5), c(0, 0x120b5f1e15d52fd0, 0x887178f6c682fed4),
    ],
    [
        c(0, 0x49e0dc815fbd16f8, 0x8322c92037f0a23d), c(0, 0xeb43d57efeadce7f, 0x361d301ff4f795b7), c(-1, 0xbfd015b492407ed1, 0x82d93edc7e736ab3),
        c(-1, 0xcf479b49382cca71, 0xebaef8c0499c51d9), c(0, 0x316ebf434cb31f5c, 0x1e03aaeefcbf717b), c(0, 0x05492bcb683e52cf, 0x34f3c6f185cc3595),
        c(-1, 0xdf4f61c7aec0be40, 0x5e5b17197d7c2014), c(0, 0x0bda8da914c69c86, 0x822505c81b7ae690), c(0, 0x0fb509dc0f060680, 0xb9ec66943515257e),
    ],
    [
        c(0, 0x4d89dcdc1faf2f34, 0xe2d5da4c693d7994), c(0, 0xe939651fe2d8d35e, 0x29fc08c0424549b5), c(-1, 0xbd9a05d44d89b22e, 0xe085b1b3baf688ce),
        c(-1, 0xd261333254c75d55, 0x5b505bdecb285192), c(0, 0x31ba3d1de297b003, 0x3d9acf2640e4c01b), c(0, 0x024907b7b707ad0b, 0x2095f06e494d5b11),
        c(-1, 0xe0b67f1bf6acb479, 0xe5332d7adb15d31d), c(0, 0x0dd14986eba5d225, 0x03a173ed2822cc6b), c(0, 0x0d4db706a4dfe327, 0x78d57c55e96c1368),
    ],
    [
        c(0, 0x512a90db0abc26a2, 0xa1bc3aa4c45c6cf2), c(0, 0xe71dd94ae03b95b4, 0x2a0377c4c5a3b978), c(-1, 0xbb893df77969e2de, 0x9ad8b7edc482d8f1),
        c(-1, 0xd57daa28c25c64d2, 0x05d5c1f7002f52fe), c(0, 0x31cb195917859b47, 0x69a2b4ae39403299), c(-1, 0xff6d009294bf1d37, 0x9807041fb9d3bcc9),
        c(-1, 0xe25063ba29563b60, 0xbb0010c27e7a63d4), c(0, 0x0f7af9fb1ed12467, 0x33b1137fcb7e182d), c(0, 0x0ae29964aff20cd2, 0x444676fc14cb8bf0),
    ],
    [
        c(0, 0x54c2b6654735276d, 0x4cdbfbbdfbecf461), c(0, 0xe4f25c8ffc6c368f, 0xd8f5fcd9bebb39fb), c(-1, 0xb99dcaf3429bcb44, 0x444bec1a8cb44469),
        c(-1, 0xd8996d97f8869f0f, 0xb6b44815ce7d62e8), c(0, 0x31a4532f3abd4b75, 0xd36606d308646689), c(-1, 0xfcb973b701809206, 0x56aaef92264e5726),
        c(-1, 0xe4149d23438cdd9d, 0xfdde53207812ad95), c(0, 0x10d72904529341c2, 0xc2a4154e1843e070), c(0, 0x087fb9ab7239c82d, 0xc82ce3dc3896cb43),
    ],
    [
        c(0, 0x5852100c273f8658, 0xda8ea8ee100507e1), c(0, 0xe2b8193d7ecf58a0, 0x1993e79c9c503b8c), c(-1, 0xb7d78fe7ffef849c, 0x1dba553423e8571f),
        c(-1, 0xdbb11d6f2a9f4615, 0xc02c5033f93ed510), c(0, 0x31493939a1cc82b0, 0xaaab5b9b127dc1cd), c(-1, 0xfa31f3d1b21bcb74, 0xc023336d5405b76d),
        c(-1, 0xe5fac0d6de623014, 0xad79db01b7bdca66), c(0, 0x11e6e22bd748b311, 0x92ace09383b7d421), c(0, 0x062fc14778a8c994, 0xeaecde7e3a145d7c),
    ],
    [
        c(0, 0x5bd86507937bc239, 0xc55190916e7f2242), c(0, 0xe070381c0e070383, 0xa8e428bd8f665cc9), c(-1, 0xb63648bb28fa1b72, 0x759040907418eb79),
        c(-1, 0xdec19098e6af7713, 0x955d552b963e59a1), c(0, 0x30bd59af56c2277c, 0xd281f131ffb46ae8), c(-1, 0xf7d94b87bce374d2, 0x2933960fdf8e4464),
        c(-1, 0xe7fa9413769129c6, 0x2b27fffb5c579b04), c(0, 0x12ac866fff97cea5, 0xba1870adfbc4de27), c(0, 0x03fbd6861a7753b1, 0x14e4f023d779122a),
    ],
    [
        c(0, 0x5f55812d8ecfdd69, 0xc885c2b249a08813), c(0, 0xde1bdf3f63d46709, 0x338ba579f5118086), c(-1, 0xb4b98cc108a006c2, 0x16dee66218dd6375),
        c(-1, 0xe1c7d879080beb1f, 0xaadb8cfcbad79edd), c(0, 0x300472fc84a09be8, 0x3ddc18aa1da41be5), c(-1, 0xf5b1839b7b24e827, 0x2f924b3262aabaef),
        c(-1, 0xea0c2e8785addd94, 0xd9f87faf2bdc1038), c(0, 0x132b9bb6b5765d7d, 0x16206789ee632cfc), c(0, 0x01eb894529103868, 0xa2d194598266e506),
    ],
    [
        c(0, 0x62c934e5286c95b6, 0xd0ba3748fa85146f), c(0, 0xdbbc30ece6e4bf6a, 0x8d6bb713593d9e70), c(-1, 0xb360d18aa11c1a8f, 0x07608c555fdea768),
        c(-1, 0xe4c143789e860278, 0x1d8e81d15ae71b86), c(0, 0x2f2264f39d5cd2ae, 0xe0790acf40c207c4), c(-1, 0xf3bbec113d2aa4b0, 0x995edb118e1f4972),
        c(-1, 0xec281793149cc59c, 0x4e1e47a2ae0341a4), c(0, 0x136899da656ca9d3, 0x121092ff1b6ed1ed), c(0, 0x0004ceb9c317e18b, 0xd82f0485e8a20100),
    ],
    [
        c(0, 0x6633551535ac619e, 0x6c988fd0a76cdbe2), c(0, 0xd9524a991f5b4fa4, 0xec897fcb0978cb4b), c(-1, 0xb22b6dcca9cce125, 0x80984aba6bf4e282),
        c(-1, 0xe7ab5eab2a3a314d, 0x508978553a8840f3), c(0, 0x2e1b22cf0c74cfcd, 0x7eb29b7cbd7871b1), c(-1, 0xf1f927cf0a071feb, 0xf42e438fc92f88f2),
        c(-1, 0xee475df0da66e2c9, 0x4649c61fa98b2ef1), c(0, 0x1368b7350eaf4e7f, 0x659f5e5688a7b1e3), c(-1, 0xfe4c0a71d04eeb2d, 0xdc65db12fa7becc8),
    ],
    [
        c(0, 0x6993bb0f308ff2db, 0x213e4af4800f389b), c(0, 0xd6df43fca482f00e, 0xb64bb3d0ebaaf4c8), c(-1, 0xb1189c552ad40f90, 0xccfaef7663c4b226),
        c(-1, 0xea83f69ba5ac3238, 0xa91058eddb06edd3), c(0, 0x2cf2a62fd349e529, 0xb3aa75d35dd6a7ac), c(-1, 0xf0693a312f1be797, 0x892dcb37f6424c2f),
        c(-1, 0xf063a9cf9b1af183, 0x7cee98bc6f176bf1), c(0, 0x1331b6515441ec7d, 0xa4c9381659626db6), c(-1, 0xfcc4226d21490c3e, 0x669bf9c2cc5d73e3),
    ],
    [
        c(0, 0x6cea44769971b1ae, 0x187b1ca504031a2f), c(0, 0xd4642e40d1129d88, 0xe914534da3a3af2e), c(-1, 0xb0277f05f79c72ed, 0xbb7a9254a6212992),
        c(-1, 0xed4917524a3236ea, 0x1fa19653cb035a9e), c(0, 0x2bace33b05c9a808, 0xef9157f655bca83f), c(-1, 0xef0b9610428c85e8, 0x274cfcd9efdbdbc3),
        c(-1, 0xf277498f1540433f, 0xe0e19a8e5dd63814), c(0, 0x12c9b624b0c1a55d, 0xfa8b7b7084cc7d5d), c(-1, 0xfb6e9c08f419f33c, 0xb7fdc8b058594049),
    ],
    [
        c(0, 0x7036d3253b27be33, 0xe318f6cb3cc65c02), c(0, 0xd1e2134440c4c3f2, 0xfe661f5e7fa4c668), c(-1, 0xaf5721cb1fe2411f, 0xdb89ccb2dda93c2a),
        c(-1, 0xeff90ba5c92e169f, 0x2f47ac2e61de9c8b), c(0, 0x2a4dbdee164e6358, 0x8c51908165d2ac9c), c(-1, 0xeddf2dbbbd7879e4, 0xc96ba5c01895b570),
        c(-1, 0xf47d3976aa996791, 0x7478b353678b785c), c(0, 0x123705ecf973d0e2, 0x8a395c28f767e7ee), c(-1, 0xfa4bbf76772cb10f, 0x4d4ad5e94615d55f),
    ],
    [
        c(0, 0x73794d0cb04d425d, 0x305bbe70e536e164), c(0, 0xcf59f4f6d6565cd8, 0x69f68e45185d10e8), c(-1, 0xaea67d85575e8412, 0x357ea26eca463469),
        c(-1, 0xf2925bebe74c849c, 0xcc596e6e902f59e1), c(0, 0x28d900b8785067fb, 0xb5cb16344057c6fc), c(-1, 0xece28375b979bb40, 0x3fb8f7ab2d4ba49f),
        c(-1, 0xf67126d6d3b18d6e, 0x7a547c25b4451141), c(0, 0x117ffd823222196f, 0xdb73a89f2cdc7d0f), c(-1, 0xf95abf8d7537d466, 0x70d1360fd9d1b82e),
    ],
    [
        c(0, 0x76b19c1586ed3da2, 0xb7f222f65e1d4682), c(0, 0xcccccccccccccccd, 0x658d1aecdce32ef1), c(-1, 0xae147ae147ae0e0f, 0xc877e9c165138ec0),
        c(-1, 0xf513cc1e09a31503, 0xf1364e020361bb0f), c(0, 0x275254608cf1fb70, 0x977493d5e2c39344), c(-1, 0xec13ba07ea19300f, 0xfdb6e87f7c0d71f2),
        c(-1, 0xf84f6f197d1cb636, 0xb799333aab8613fd), c(0, 0x10aadaa7aa2634bc, 0x8039840799a4c227), c(-1, 0xf899e3f9bafcfc26, 0x3b38e0a60b162801),
    ],
    [
        c(0, 0x79dfadfc5d68d10e, 0x53dc1bf34356f9fd), c(0, 0xca3b8b48225d1e2b, 0x33249ad95a46576c), c(-1, 0xad9ff515b809d856, 0x6b72e3d7a19b51b7),
        c(-1, 0xf77c5986656bba78, 0xa7dba094e80aeab5), c(0, 0x25bd39322e6e2814, 0xb9dd3ebb058a2992), c(-1, 0xeb70a516e820d888, 0xda06e1acd3937cf5),
        c(-1, 0xfa151b5124e93103, 0x58f15223d423cd9b), c(0, 0x0fbda3a70df30ac7, 0x7886bbb2dd3dd17a), c(-1, 0xf806b3fe080ab3bd, 0x96c467f065173508),
    ],
    [
        c(0, 0x7d03742d50505f2e, 0x33691e3eaee47661), c(0, 0xc7a717977e89a6b4, 0x10b8442baa6acca5), c(-1, 0xad47bc836d34b9d9, 0x85334c5ed941f98e),
        c(-1, 0xf9cb380a3272757c, 0xe48fa8479151e43b), c(0, 0x241d016e9e136be9, 0xfe4fe2b09fec14a5), c(-1, 0xeaf6d8e6aa06dff4, 0xb9b25dc629d39a43),
        c(-1, 0xfbbfd8dba86a2b90, 0x3ff9fcfd195cc2f0), c(0, 0x0ebe0f47618731d1, 0xd07057567963f2cd), c(-1, 0xf79e204cccc690e6, 0x07f080cd0a6e5904),
    ],
    [
        c(0, 0x801ce39e0d205c99, 0xa6d6c6c54d938596), c(0, 0xc5104f498fe698e5, 0xf2ff570a5c18f398), c(-1, 0xad0a993294b49d9e, 0x6afe94f5ccc0a182),
        c(-1, 0xfbffcf248f375897, 0xac1b257b3d472501), c(0, 0x2274ccf01d694d91, 0xc8edf1f88bcfa822), c(-1, 0xeaa3b950fdc4b7ba, 0x0b8098c8c4fa2c94),
        c(-1, 0xfd4defad122c2e27, 0x0017057b6103db5d), c(0, 0x0db17201dbc0c56d, 0x9e7d07a7637e2ed4), c(-1, 0xf75caac086f4ea88, 0x25b7c1409bc47578),
    ],
    [
        c(0, 0x832bf4a6d9867e2a, 0x4b6a09cb61a515c1), c(0, 0xc2780613c0309e01, 0x92921793e6610035), c(-1, 0xace74d2a74e76ce7, 0xe994001ea9965b78),
        c(-1, 0xfe19b6a4c5b60d65, 0xba2349b021a3a6d0), c(0, 0x20c785ef1565b3c4, 0x71b76823c4b9ce57), c(-1, 0xea7487bc87881559, 0xebdf6806569974ae),
        c(-1, 0xfebe36d158a6819b, 0xfe811e584fd9b6aa), c(0, 0x0c9cb02fda103547, 0x0aafc894690a7c84), c(-1, 0xf73e8b06eee20316, 0xe6376d973fe5f827),
    ],
    [
        c(0, 0x8630a2dada1ed065, 0xd3e84ed5013ca37e), c(0, 0xbfdf05ab069add61, 0xe67da8f5ec40f551), c(-1, 0xacdc96a0f478d5c5, 0x81e2220b9a38cd79),
        c(0, 0x0018b34161c4f55e, 0x5acc66e0f7609024), c(0, 0x1f17ded35442774e, 0xd788d8b03bf138ec), c(-1, 0xea666fefc7ff9445, 0x6c9e6cb48c1cc2f5),
        c(0, 0x001007aae1f14e8b, 0x39866f7b78539c3e), c(0, 0x0b8434cf97734b5d, 0x403700cbdccb33a5), c(-1, 0xf73fcf97ed056d90, 0xea7db2d141cfb68f),
    ],
    [
        c(0, 0x892aecdfde9547b5, 0x094478fc472b4afc), c(0, 0xbd460dad8ffd0ae7, 0xa5d962e11292af5a), c(-1, 0xace9320054a922f5, 0xc969898905c354c2),
        c(0, 0x01fcb3101e47e34e, 0xe185da787571f692), c(0, 0x1d6850f98aa7ceee, 0xcc76e372f20db836), c(-1, 0xea7693a7aeba2038, 0xa386269d4b908308),
        c(0, 0x01433067c2821c77, 0xc51676545aea4f6c), c(0, 0x0a6bec6883443e07, 0x22c5b9fdcd514cd0), c(-1, 0xf75c7a90f0108266, 0x239b357bf2073251),
    ],
    [
        c(0, 0x8c1ad445f3e09b8c, 0x439d801860205921), c(0, 0xbaadd39bea4e4ca8, 0x6ac867ee05780515), c(-1, 0xad0bdbc230ed366a, 0x9cdfe269e5e9de14),
        c(0, 0x03c5c9f12401a8b0, 0xd3d4153bf9c66661), c(0, 0x1bbb1c53b5617b27, 0x7b63dacd44f548d0), c(-1, 0xeaa214e40a1b280f, 0x304dd0ad6ea73d32),
        c(0, 0x0257e619f68918dc, 0xa75cd803b6ede5d2), c(0, 0x0957438b3d749e62, 0x2d222e7cc6c2dc51), c(-1, 0xf7909a4502fd998d, 0x7afc3fba1d6cde40),
    ],
    [
        c(0, 0x8f005d5ef7f59f9b, 0x5c835e1665c43748), c(0, 0xb81702e05c0b816f, 0xe74f6798becbbb1d), c(-1, 0xad43521f7a962a97, 0x5ab70e857f9934e8),
        c(0, 0x05742dfa79210abc, 0xc891e44ce26bcd86), c(0, 0x1a1247ca701e9c01, 0x53084a78cfbd0a31), c(-1, 0xeae61ee59c89a20e, 0xcd2ffe9a3d38f29f),
        c(0, 0x034eb6d01839f122, 0xe422c8dc2e5fed6e), c(0, 0x08492863615e36a8, 0xbe8caa9703f3da7a), c(-1, 0xf7d85d810048d2c7, 0x26cc776e814f67c1),
    ],
    [
        c(0, 0x91db8f1664f350e2, 0x10e4f9c1126e0220), c(0, 0xb5823ce3102cab0c, 0xa853ec642163e0bd), c(-1, 0xad8e5695b7dde61d, 0x8e8bf9237d6500dc),
        c(0, 0x070833eedf8b2c0a, 0x010b365f8efc4431), c(0, 0x186fa2452c490213, 0x1c75f79cebc03b2b), c(-1, 0xeb3fede1adc50b9c, 0xd2b47fb152480fdb),
        c(0, 0x04287bfd050f0498, 0xe3ba24205fc47ceb), c(0, 0x07440ed14ba7a2ad, 0x4e7528a561bff8fa), c(-1, 0xf83023a9255cfa6e, 0x0c09d02137db64a8),
    ],
    [
        c(0, 0x94ac72c9847186f6, 0x18c4f393f78a32f9), c(0, 0xb2f01929c389df7f, 0x05f2c4f9e898800c), c(-1, 0xadebaf424aea2fd7, 0x5114bce2f2b7a347),
        c(0, 0x08824bc9c3721a95, 0x71f7d687bbec39c9), c(0, 0x16d4c43fd8aa58dc, 0x3598dbb4ec922e4f), c(-1, 0xebacd5759721f304, 0x8dea2225c3f64594),
        c(0, 0x04e64d6e15830baa, 0x2ebb77ba445ae975), c(0, 0x0649f686c6ad3bc3, 0x292e6ad3bfc05168), c(-1, 0xf89488f24d56ea76, 0xc6aa3724145db939),
    ],
    [
        c(0, 0x97731420365e538b, 0xabd3fe19f1aeb6b3), c(0, 0xb0612581a869c23f, 0x987d76f839fefc46), c(-1, 0xae5a2814ef7d1221, 0x8cfc2ca3aef180f4),
        c(0, 0x09e2fd684c4d0a80, 0xa27de9ce028d3d17), c(0, 0x154311d58fab9e9b, 0x5e3322160fa59057), c(-1, 0xec2a45ea15b901dc, 0x83c3c6d13669d170),
        c(0, 0x0589750172dfcaa7, 0x1bba369c5de980f4), c(0, 0x055c72a9e65f4f0a, 0x8be010b714ff3bd2), c(-1, 0xf9026f0dd53b927b, 0x049b58da66f3a23c),
    ],
    [
        c(0, 0x9a2f80e671bdda20, 0x4226f8e2204ff3bd), c(0, 0xadd5e6323fd48a86, 0x09cd387f470bbfb8), c(-1, 0xaed893daf5e4c5cd, 0x951fd0d1705733a3),
        c(0, 0x0b2ae556266a6d2a, 0x0b08fb6bb7dc6881), c(0, 0x13bbbd29481fab1c, 0x7f8e636017f1b155), c(-1, 0xecb5d05a33bcf916, 0xa5b2d711dc59371c),
        c(0, 0x061363410c88e13f, 0x2b5a7b014316a287), c(0, 0x047cb28c4ee5013b, 0x46099b388eb89279), c(-1, 0xf97702ac7a364738, 0xf480046d0686d7fb),
    ],
    [
        c(0, 0x9ce1c8e6a0b8cdb9, 0xf799c4e8174cf11c), c(0, 0xab4ed637f5a0ba07, 0x303a9760bb359877), c(-1, 0xaf65cd25085a0398, 0xc2b8b04192250c26),
        c(0, 0x0c5ab1c3381d3205, 0x3c3a7cfcdb31176e), c(0, 0x123fc9172f52e7cc, 0x4433f8346fc89f81), c(-1, 0xed4d29d476789e5b, 0x78a2faac19127398),
        c(0, 0x0685a4faed00bb12, 0xd5d72e2ec80cfd49), c(0, 0x03ab8b11bab61228, 0x50a7ada8aec4e493), c(-1, 0xf9efbe43699d437f, 0x2555dbeefe5f5ee7),
    ],
    [
        c(0, 0x9f89fdc4f4b7a1ec, 0xf8b492644f0701e0), c(0, 0xa8cc67855b7cc91b, 0x1a0598deb55ccba4), c(-1, 0xb000b7097e983506, 0x0860c53eed13b830),
        c(0, 0x0d731fa62e8cdb79, 0x8068ec1284192eb3), c(0, 0x10d00c1b2c84c061, 0xc6a8219389a2ac6f), c(-1, 0xedee2d8ed19026c4, 0x1b1169861e008e8a),
        c(0, 0x06e1d9e559fad6d2, 0x6cec598fa5db7a2b), c(0, 0x02e9806e084745c7, 0x2bde373b15f4245b), c(-1, 0xfa6a6a8051045daa, 0x12ccf1dd4c497821),
    ],
    [
        c(0, 0xa22832dbcadaae08, 0x92fe9c08637af0e6), c(0, 0xa64f0349f000a64e, 0x96a5890dfd349545), c(-1, 0xb0a83dc56b7964e8, 0x459c67723184365b),
        c(0, 0x0e74f80ea5bf356a, 0xf4aa1dab4abb980c), c(0, 0x0f6d335b029e4edb, 0x037eb0575e2021cb), c(-1, 0xee96de46cd03cc51, 0xaf52736ad7a92602),
        c(0, 0x0729ac5450cdb4f8, 0x4b6c1bc5caedede8), c(0, 0x0236cff0bad832ed, 0xdd6a608779124cd3), c(-1, 0xfae51cd698662f57, 0xbd13b59cb1c98e66),
    ],
    [
        c(0, 0xa4bc7d1934f70924, 0x19a87f2a457dac9f), c(0, 0xa3d70a3d70a3d709, 0xd2cdff8fd1e789c8), c(-1, 0xb15b573eab367e89, 0xf54e6853b877ac34),
        c(0, 0x0f610da8a6b6347f, 0x65d95fb9f7247012), c(0, 0x0e17c5c48454a6e5, 0x66ee4c31424650a8), c(-1, 0xef4566e775a4b720, 0x6d04a65100d39606),
        c(0, 0x075ec9fe8f784321, 0x55a689c1215f3101), c(0, 0x019379a12648fb1e, 0x5ab1708872e13acc), c(-1, 0xfb5e348a18904c35, 0xb090c044a8553788),
    ],
    [
        c(0, 0xa746f2ddb7602294, 0x67b7d66f2d74e019), c(0, 0xa164d4eec7ee0845, 0xe3e3a64ab59982f9), c(-1, 0xb2190369481a06e5, 0x0161dbaea04c27a7),
        c(0, 0x10383a724dad339b, 0x37cf666a88cbe39c), c(0, 0x0cd027324b13c16f, 0xea7f9d3470f9974b), c(-1, 0xeff81a8e39e84fdc, 0xf55b7b9f3707fc98),
        c(0, 0x0782ddca632ccbe8, 0xcf2ca53ba4d011be), c(0, 0x00ff497b0cefdd1d, 0xf453bf5fc355439b), c(-1, 0xfbd456938387a82e, 0x44aa16d0f7f743d8),
    ],
    [
        c(0, 0xa9c7abdc4830f5c8, 0x916a84b5be7933f6), c(0, 0x9ef8b415bc009ef8, 0x508c88b5f51df18f), c(-1, 0xb2e04c92907475b2, 0xab3406f2559fd938),
        c(0, 0x10fb5da3a10e9e49, 0x1185fff0f7d9097a), c(0, 0x0b969b8b4ede1e23, 0x2c045adcfa987032), c(-1, 0xf0ad7406e01cf582, 0xaeb72753eb256b23),
        c(0, 0x07978a95cf5ab11c, 0x29a038791601fbb4), c(0, 0x0079e026fff16d24, 0x349ff7ddf6f85777), c(-1, 0xfc4668b124871aac, 0xa5743eeb9db33b68),
    ],
    [
        c(0, 0xac3ec0fb997dd6a1, 0xa36273a56afa8ef4), c(0, 0x9c92f0e69464c390, 0x29889ce52322a82c), c(-1, 0xb3b0479434e77bff, 0x17daaea859fb9f86),
        c(0, 0x11ab59c7f6771d28, 0x4c9da886976bb057), c(0, 0x0a6b49d39400cbf5, 0x5e2eb0dbf9244063), c(-1, 0xf16414d56d293669, 0x24040e329d618b2e),
        c(0, 0x079e66ea2c6fcf69, 0x4c43c768f0fff6af), c(0, 0x0002bb142885f548, 0x175284a8535c8791), c(-1, 0xfcb38bec49cd4498, 0x82050556e6796066),
    ],
    [
        c(0, 0xaeac4c38b4d8c080, 0x14725e2f3e52070a), c(0, 0x9a33cd67009a33cd, 0x0d55bc9022f644bb), c(-1, 0xb48813f1bb097a60, 0x22adf9c745be73bf),
        c(0, 0x12491307b45d0f6a, 0x61b3647892aacba8), c(0, 0x094e3f25dc9538ea, 0x8aa9df8dca6b97d0), c(-1, 0xf21ac3e3374aeb48, 0x4a6d9c3e30ef66bf),
        c(0, 0x0798f988f9173518, 0xf20cb6d6cfa191c5), c(-1, 0xff993be22ac508f3, 0x80c39ae2865c8bb6), c(-1, 0xfd1b16d122db25ef, 0x4beed55dfb284d96),
    ],
    [
        c(0, 0xb110688aebdc6f6a, 0x43d65788b9f6a7b5), c(0, 0x97db84c39b0242f4, 0x960a1eb67665bf49), c(-1, 0xb566dbe27f3eb54c, 0x96fbe31974765143),
        c(0, 0x12d56da0caba59d6, 0x39c5282249011b7f), c(0, 0x083f718fe2c7d8e7, 0x18167898fe04b8f0), c(-1, 0xf2d06be29676ecdb, 0xc150177616909102),
        c(0, 0x0788b6be1efe3097, 0xb99dd2b4727699e7), c(-1, 0xff3caf118ad0306d, 0x1bb6601aa51c27c8), c(-1, 0xfd7c8f8c91a48259, 0x1f48aee76ee8dcf3),
    ],
    [
        c(0, 0xb36b31c91f043691, 0x590141744462f93a), c(0, 0x958a4ba5754432d1, 0xb158b0da1604c738), c(-1, 0xb64bd44a6aa38c32, 0x53a7cb84ef93ba61),
        c(0, 0x13514c8be1292bcb, 0x72dac1d265fe6065), c(0, 0x073ec2cc12f2610b, 0x77e9fc2cc45a949d), c(-1, 0xf384197ac04d69cb, 0xb91fe7be67ab3ccd),
        c(0, 0x076efe63389e27d7, 0x248113d9da28caa5), c(-1, 0xfeec51f76b3c64ae, 0x7e71cab2da1f01c1), c(-1, 0xfdd7a619af3edc56, 0xef552fc5bc2c210c),
    ],
    [
        c(0, 0xb5bcc49059ecc4af, 0xf8f3cee75e3907d5), c(0, 0x934050872c09ec15, 0x249c2535961018db), c(-1, 0xb7363ca368179462, 0xa92cada2c155562c),
        c(0, 0x13bd904bf2e7787b, 0xcc00a6800d9beac4), c(0, 0x064c02d50873cbc8, 0xc7a40461c043b9d1), c(-1, 0xf434f94b70fd323a, 0xe9347a985454fa72),
        c(0, 0x074d1a7f55125830, 0x14e6e6668e8f951b), c(-1, 0xfea757f6b16ae2a8, 0x15f4ff8e44f77be2), c(-1, 0xfe2c2e9fce1be41c, 0xab801ea17e31d9d4),
    ],
    [
        c(0, 0xb8053e2bc2319e73, 0xcb2da55210a4443d), c(0, 0x90fdbc090fdbc090, 0xbb19f6498f01b05f), c(-1, 0xb8255ed986ddde45, 0x2a0801df8f51208c),
        c(0, 0x141b15e5dec233d9, 0xb727f93f5b10b63a), c(0, 0x0566f25035ab82c1, 0x39919df8db450fda), c(-1, 0xf4e255d61aa492a5, 0x13e5f262d8108e9e),
        c(0, 0x07243e6f28d7d4e8, 0xf74c10a4556f2b9e), c(-1, 0xfe6cef04b33e991d, 0x91f62a407bcb3084), c(-1, 0xfe7a1c19b878fe0a, 0xcbb5b9d39eaaa689),
    ],
    [
        c(0, 0xba44bc7dd470782f, 0x654c2cb10942e386), c(0, 0x8ec2b143ffdc4f53, 0x7226ecfe89004cae), c(-1, 0xb9188f1b9ab70310, 0x74c6b1dbe6231616),
        c(0, 0x146ab5fd4fa04882, 0xa04bf54b6ddc1e1a), c(0, 0x048f44ce1f6897af, 0x8095a99665b67821), c(-1, 0xf58b95587c8c004b, 0x912c59c738125c74),
        c(0, 0x06f5868270b32e08, 0x35aab8edb2ec5735), c(-1, 0xfe3c4382a6d120a4, 0x465affbcffd49459), c(-1, 0xfec17b57db4c42d0, 0x505d6f5b5c87df90),
    ],
    [
        c(0, 0xbc7b5deae98af280, 0xd4113006e80fb290), c(0, 0x8c8f4e1aa1264c0b, 0x508b92f893b33fb3), c(-1, 0xba0f2ba20995ed39, 0xee28652e8dbccd1b),
        c(0, 0x14ad44144ff8508a, 0x0f07e3ed3b7f78a6), c(0, 0x03c4a2df70079625, 0x119c719fcf4a228b), c(-1, 0xf63037a2c326492e, 0xb70025f743a7e379),
        c(0, 0x06c1f7fc6c6a8c87, 0xe8ccece431554918), c(-1, 0xfe14837740392684, 0x94f80e546919d8bc), c(-1, 0xff026e69006da6c1, 0x3fc341fd9252fe94),
    ],
    [
        c(0, 0xbea94144fd049aac, 0x1043c5e755282e7d), c(0, 0x8a63ab88aa8dd5e6, 0xbc6bee6059d77fd6), c(-1, 0xbb089c6d56bdaece, 0x1ac8c561628ac9dd),
        c(0, 0x14e38dead4bb6d55, 0xc5c012646533edd7), c(0, 0x0306abfee07a5418, 0x7992f3742eccaf58), c(-1, 0xf6cfd3f1aeeaffff, 0x59f389c64116808b),
        c(0, 0x068a8166aa9bbb2a, 0xde8afe3b4caa8d38), c(-1, 0xfdf4e1355b4f2dae, 0x93224ecbe78fcc46), c(-1, 0xff3d287027322905, 0x17efabe816593899),
    ],
    [
        c(0, 0xc0ce85b8ac526640, 0x89dd62c46e92fa25), c(0, 0x883fddf00883fdde, 0xd3f48b3a4b21a764), c(-1, 0xbc0452fddac0cf4f, 0x0feda8a396346324),
        c(0, 0x150e5afb91200487, 0xc72f9c3e11a645ed), c(0, 0x0254f8509006d83b, 0x586ee0ab0cf24470), c(-1, 0xf76a16d3bebd92ac, 0xd970db39a707e1d1),
        c(0, 0x064ffb26d23b2b72, 0x0615106e257aafd0), c(-1, 0xfddc957d5ef52754, 0x23403950f4906925), c(-1, 0xff71e9e9e2a13305, 0x187ffc0d1be499c6),
    ],
    [
        c(0, 0xc2eb4abb661628b5, 0xb373fe45c61bb9fb), c(0, 0x8623f563a7d6ddf9, 0x1949f84cc77355da), c(-1, 0xbd01ca05f7f55f42, 0x671e0e95e904dbab),
        c(0, 0x152e6c137257287c, 0x63dd137c5343f541), c(0, 0x01af1a37e162774d, 0x934227c720d0326a), c(-1, 0xf7fec01efcd5ff4e, 0xdbd774e3917d38b2),
        c(0, 0x0613284999160325, 0xa05333a5215bf18f), c(-1, 0xfdcae12752337e63, 0x48b9ccb677a967ca), c(-1, 0xffa0fd605430f0c9, 0xd953ae5ef763feb9),
    ],
    [
        c(0, 0xc4ffaffabf8fbd54, 0x8cb43d10bc9e0221), c(0, 0x840ffdefc00840ff, 0xbbf6babdf9cdc7f2), c(-1, 0xbe008517fbdb6191, 0x68ef99e467ca6c18),
        c(0, 0x15447b0136e1f2f7, 0xa73b3debb7a464f8), c(0, 0x01149fc557bfcd51, 0x8c7dc71fe10ef76a), c(-1, 0xf88da0fbd3d9a5d5, 0x3c1f392e427daf76),
        c(0, 0x05d4b7769bf6a94f, 0x12812cc0077f5713), c(-1, 0xfdbf0e637c829a46, 0x412d832bb2302246), c(-1, 0xffcab48a4adbf6af, 0xb7a03b7a8e66758a),
    ],
    [
        c(0, 0xc70bd54ce602ee13, 0xe7d54fbd09f2be38), c(0, 0x8203ffdf7f000820, 0x214c5c5a9d3386e5), c(-1, 0xbf001050bff7dcfa, 0x131d7414fb62f2d6),
        c(0, 0x15513a5aaf6978c5, 0xbb410b43be8289ba), c(0, 0x008513fe3b49691b, 0x9f67969a95336119), c(-1, 0xf9169a083cbe468f, 0x1228b0ef6e64592b),
        c(0, 0x059544024a86464f, 0x9ce1be0919afb427), c(-1, 0xfdb8719ef9f86240, 0xf19d133d7c886ea5), c(-1, 0xffef65d0285c4e10, 0x093566d105c052e0),
    ],
];
