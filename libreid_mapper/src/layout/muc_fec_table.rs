use super::muc::FecEntry;

/// Front-end card map of the muon counter readout: card, part, segment, layer, first strip.
/// Cards missing from the list are not installed.
#[rustfmt::skip]
pub static MUC_FEC_TABLE: &[FecEntry] = &[
    FecEntry::new(0, 0, 0, 3, 48), FecEntry::new(1, 0, 0, 3, 32), FecEntry::new(2, 0, 0, 3, 16), FecEntry::new(3, 0, 0, 3, 0),
    FecEntry::new(4, 0, 0, 2, 48), FecEntry::new(5, 0, 0, 2, 32), FecEntry::new(6, 0, 0, 2, 16), FecEntry::new(7, 0, 0, 2, 0),
    FecEntry::new(8, 0, 0, 1, 48), FecEntry::new(9, 0, 0, 1, 32), FecEntry::new(10, 0, 0, 1, 16), FecEntry::new(11, 0, 0, 1, 0),
    FecEntry::new(12, 0, 0, 0, 48), FecEntry::new(13, 0, 0, 0, 32), FecEntry::new(14, 0, 0, 0, 16), FecEntry::new(15, 0, 0, 0, 0),
    FecEntry::new(16, 0, 0, 7, 48), FecEntry::new(17, 0, 0, 7, 32), FecEntry::new(18, 0, 0, 7, 16), FecEntry::new(19, 0, 0, 7, 0),
    FecEntry::new(20, 0, 0, 6, 48), FecEntry::new(21, 0, 0, 6, 32), FecEntry::new(22, 0, 0, 6, 16), FecEntry::new(23, 0, 0, 6, 0),
    FecEntry::new(24, 0, 0, 5, 48), FecEntry::new(25, 0, 0, 5, 32), FecEntry::new(26, 0, 0, 5, 16), FecEntry::new(27, 0, 0, 5, 0),
    FecEntry::new(28, 0, 0, 4, 48), FecEntry::new(29, 0, 0, 4, 32), FecEntry::new(30, 0, 0, 4, 16), FecEntry::new(31, 0, 0, 4, 0),
    FecEntry::new(32, 0, 3, 7, 48), FecEntry::new(33, 0, 3, 7, 32), FecEntry::new(34, 0, 3, 7, 16), FecEntry::new(35, 0, 3, 7, 0),
    FecEntry::new(36, 0, 3, 6, 48), FecEntry::new(37, 0, 3, 6, 32), FecEntry::new(38, 0, 3, 6, 16), FecEntry::new(39, 0, 3, 6, 0),
    FecEntry::new(40, 0, 3, 5, 48), FecEntry::new(41, 0, 3, 5, 32), FecEntry::new(42, 0, 3, 5, 16), FecEntry::new(43, 0, 3, 5, 0),
    FecEntry::new(44, 0, 3, 4, 48), FecEntry::new(45, 0, 3, 4, 32), FecEntry::new(46, 0, 3, 4, 16), FecEntry::new(47, 0, 3, 4, 0),
    FecEntry::new(48, 0, 3, 3, 48), FecEntry::new(49, 0, 3, 3, 32), FecEntry::new(50, 0, 3, 3, 16), FecEntry::new(51, 0, 3, 3, 0),
    FecEntry::new(52, 0, 3, 2, 48), FecEntry::new(53, 0, 3, 2, 32), FecEntry::new(54, 0, 3, 2, 16), FecEntry::new(55, 0, 3, 2, 0),
    FecEntry::new(56, 0, 3, 1, 48), FecEntry::new(57, 0, 3, 1, 32), FecEntry::new(58, 0, 3, 1, 16), FecEntry::new(59, 0, 3, 1, 0),
    FecEntry::new(60, 0, 3, 0, 48), FecEntry::new(61, 0, 3, 0, 32), FecEntry::new(62, 0, 3, 0, 16), FecEntry::new(63, 0, 3, 0, 0),
    FecEntry::new(64, 0, 2, 3, 48), FecEntry::new(65, 0, 2, 3, 32), FecEntry::new(66, 0, 2, 3, 16), FecEntry::new(67, 0, 2, 3, 0),
    FecEntry::new(68, 0, 2, 2, 48), FecEntry::new(69, 0, 2, 2, 32), FecEntry::new(70, 0, 2, 2, 16), FecEntry::new(71, 0, 2, 2, 0),
    FecEntry::new(72, 0, 2, 1, 48), FecEntry::new(73, 0, 2, 1, 32), FecEntry::new(74, 0, 2, 1, 16), FecEntry::new(75, 0, 2, 1, 0),
    FecEntry::new(76, 0, 2, 0, 48), FecEntry::new(77, 0, 2, 0, 32), FecEntry::new(78, 0, 2, 0, 16), FecEntry::new(79, 0, 2, 0, 0),
    FecEntry::new(80, 0, 2, 7, 48), FecEntry::new(81, 0, 2, 7, 32), FecEntry::new(82, 0, 2, 7, 16), FecEntry::new(83, 0, 2, 7, 0),
    FecEntry::new(84, 0, 2, 6, 48), FecEntry::new(85, 0, 2, 6, 32), FecEntry::new(86, 0, 2, 6, 16), FecEntry::new(87, 0, 2, 6, 0),
    FecEntry::new(88, 0, 2, 5, 48), FecEntry::new(89, 0, 2, 5, 32), FecEntry::new(90, 0, 2, 5, 16), FecEntry::new(91, 0, 2, 5, 0),
    FecEntry::new(92, 0, 2, 4, 48), FecEntry::new(93, 0, 2, 4, 32), FecEntry::new(94, 0, 2, 4, 16), FecEntry::new(95, 0, 2, 4, 0),
    FecEntry::new(96, 0, 1, 3, 48), FecEntry::new(97, 0, 1, 3, 32), FecEntry::new(98, 0, 1, 3, 16), FecEntry::new(99, 0, 1, 3, 0),
    FecEntry::new(100, 0, 1, 2, 48), FecEntry::new(101, 0, 1, 2, 32), FecEntry::new(102, 0, 1, 2, 16), FecEntry::new(103, 0, 1, 2, 0),
    FecEntry::new(104, 0, 1, 1, 48), FecEntry::new(105, 0, 1, 1, 32), FecEntry::new(106, 0, 1, 1, 16), FecEntry::new(107, 0, 1, 1, 0),
    FecEntry::new(108, 0, 1, 0, 48), FecEntry::new(109, 0, 1, 0, 32), FecEntry::new(110, 0, 1, 0, 16), FecEntry::new(111, 0, 1, 0, 0),
    FecEntry::new(112, 0, 1, 7, 48), FecEntry::new(113, 0, 1, 7, 32), FecEntry::new(114, 0, 1, 7, 16), FecEntry::new(115, 0, 1, 7, 0),
    FecEntry::new(116, 0, 1, 6, 48), FecEntry::new(117, 0, 1, 6, 32), FecEntry::new(118, 0, 1, 6, 16), FecEntry::new(119, 0, 1, 6, 0),
    FecEntry::new(120, 0, 1, 5, 48), FecEntry::new(121, 0, 1, 5, 32), FecEntry::new(122, 0, 1, 5, 16), FecEntry::new(123, 0, 1, 5, 0),
    FecEntry::new(124, 0, 1, 4, 48), FecEntry::new(125, 0, 1, 4, 32), FecEntry::new(126, 0, 1, 4, 16), FecEntry::new(127, 0, 1, 4, 0),
    FecEntry::new(128, 1, 7, 1, 80), FecEntry::new(129, 1, 7, 1, 64), FecEntry::new(130, 1, 7, 1, 48), FecEntry::new(131, 1, 7, 3, 48),
    FecEntry::new(132, 1, 7, 3, 64), FecEntry::new(133, 1, 7, 3, 80), FecEntry::new(134, 1, 7, 5, 80), FecEntry::new(135, 1, 7, 5, 64),
    FecEntry::new(136, 1, 7, 5, 48), FecEntry::new(137, 1, 7, 7, 48), FecEntry::new(138, 1, 7, 7, 64), FecEntry::new(139, 1, 7, 7, 80),
    FecEntry::new(144, 1, 0, 1, 48), FecEntry::new(145, 1, 0, 1, 64), FecEntry::new(146, 1, 0, 1, 80), FecEntry::new(147, 1, 0, 3, 80),
    FecEntry::new(148, 1, 0, 3, 64), FecEntry::new(149, 1, 0, 3, 48), FecEntry::new(150, 1, 0, 5, 48), FecEntry::new(151, 1, 0, 5, 64),
    FecEntry::new(152, 1, 0, 5, 80), FecEntry::new(153, 1, 0, 7, 80), FecEntry::new(154, 1, 0, 7, 64), FecEntry::new(155, 1, 0, 7, 48),
    FecEntry::new(160, 1, 1, 1, 48), FecEntry::new(161, 1, 1, 1, 64), FecEntry::new(162, 1, 1, 1, 80), FecEntry::new(163, 1, 1, 3, 80),
    FecEntry::new(164, 1, 1, 3, 64), FecEntry::new(165, 1, 1, 3, 48), FecEntry::new(166, 1, 1, 5, 48), FecEntry::new(167, 1, 1, 5, 64),
    FecEntry::new(168, 1, 1, 5, 80), FecEntry::new(169, 1, 1, 7, 80), FecEntry::new(170, 1, 1, 7, 64), FecEntry::new(171, 1, 1, 7, 48),
    FecEntry::new(176, 1, 2, 1, 64), FecEntry::new(177, 1, 2, 1, 96), FecEntry::new(178, 1, 2, 1, 80), FecEntry::new(179, 1, 2, 1, 48),
    FecEntry::new(180, 1, 2, 3, 48), FecEntry::new(181, 1, 2, 3, 80), FecEntry::new(182, 1, 2, 3, 96), FecEntry::new(183, 1, 2, 3, 64),
    FecEntry::new(184, 1, 2, 5, 64), FecEntry::new(185, 1, 2, 5, 96), FecEntry::new(186, 1, 2, 5, 80), FecEntry::new(187, 1, 2, 5, 48),
    FecEntry::new(188, 1, 2, 7, 48), FecEntry::new(189, 1, 2, 7, 80), FecEntry::new(190, 1, 2, 7, 96), FecEntry::new(191, 1, 2, 7, 64),
    FecEntry::new(192, 1, 3, 1, 80), FecEntry::new(193, 1, 3, 1, 64), FecEntry::new(194, 1, 3, 1, 48), FecEntry::new(195, 1, 3, 3, 48),
    FecEntry::new(196, 1, 3, 3, 64), FecEntry::new(197, 1, 3, 3, 80), FecEntry::new(198, 1, 3, 5, 80), FecEntry::new(199, 1, 3, 5, 64),
    FecEntry::new(200, 1, 3, 5, 48), FecEntry::new(201, 1, 3, 7, 48), FecEntry::new(202, 1, 3, 7, 64), FecEntry::new(203, 1, 3, 7, 80),
    FecEntry::new(208, 1, 4, 1, 80), FecEntry::new(209, 1, 4, 1, 64), FecEntry::new(210, 1, 4, 1, 48), FecEntry::new(211, 1, 4, 3, 48),
    FecEntry::new(212, 1, 4, 3, 64), FecEntry::new(213, 1, 4, 3, 80), FecEntry::new(214, 1, 4, 5, 80), FecEntry::new(215, 1, 4, 5, 64),
    FecEntry::new(216, 1, 4, 5, 48), FecEntry::new(217, 1, 4, 7, 48), FecEntry::new(218, 1, 4, 7, 64), FecEntry::new(219, 1, 4, 7, 80),
    FecEntry::new(224, 1, 5, 1, 48), FecEntry::new(225, 1, 5, 1, 64), FecEntry::new(226, 1, 5, 1, 80), FecEntry::new(227, 1, 5, 3, 80),
    FecEntry::new(228, 1, 5, 3, 64), FecEntry::new(229, 1, 5, 3, 48), FecEntry::new(230, 1, 5, 5, 48), FecEntry::new(231, 1, 5, 5, 64),
    FecEntry::new(232, 1, 5, 5, 80), FecEntry::new(233, 1, 5, 7, 80), FecEntry::new(234, 1, 5, 7, 64), FecEntry::new(235, 1, 5, 7, 48),
    FecEntry::new(240, 1, 6, 1, 80), FecEntry::new(241, 1, 6, 1, 64), FecEntry::new(242, 1, 6, 1, 48), FecEntry::new(243, 1, 6, 3, 48),
    FecEntry::new(244, 1, 6, 3, 64), FecEntry::new(245, 1, 6, 3, 80), FecEntry::new(246, 1, 6, 5, 80), FecEntry::new(247, 1, 6, 5, 64),
    FecEntry::new(248, 1, 6, 5, 48), FecEntry::new(249, 1, 6, 7, 48), FecEntry::new(250, 1, 6, 7, 64), FecEntry::new(251, 1, 6, 7, 80),
    FecEntry::new(256, 1, 1, 0, 0), FecEntry::new(257, 1, 1, 0, 16), FecEntry::new(258, 1, 1, 0, 32), FecEntry::new(259, 1, 1, 2, 32),
    FecEntry::new(260, 1, 1, 2, 16), FecEntry::new(261, 1, 1, 2, 0), FecEntry::new(262, 1, 1, 4, 0), FecEntry::new(263, 1, 1, 4, 16),
    FecEntry::new(264, 1, 1, 4, 32), FecEntry::new(265, 1, 1, 6, 32), FecEntry::new(266, 1, 1, 6, 16), FecEntry::new(267, 1, 1, 6, 0),
    FecEntry::new(268, 1, 1, 8, 0), FecEntry::new(269, 1, 1, 8, 16), FecEntry::new(270, 1, 1, 8, 32), FecEntry::new(272, 1, 1, 1, 32),
    FecEntry::new(273, 1, 1, 1, 16), FecEntry::new(274, 1, 1, 1, 0), FecEntry::new(275, 1, 1, 3, 0), FecEntry::new(276, 1, 1, 3, 16),
    FecEntry::new(277, 1, 1, 3, 32), FecEntry::new(278, 1, 1, 5, 32), FecEntry::new(279, 1, 1, 5, 16), FecEntry::new(280, 1, 1, 5, 0),
    FecEntry::new(281, 1, 1, 7, 0), FecEntry::new(282, 1, 1, 7, 16), FecEntry::new(283, 1, 1, 7, 32),
    FecEntry::new(288, 1, 2, 1, 32), FecEntry::new(289, 1, 2, 1, 16), FecEntry::new(290, 1, 2, 1, 0), FecEntry::new(291, 1, 2, 3, 0),
    FecEntry::new(292, 1, 2, 3, 16), FecEntry::new(293, 1, 2, 3, 32), FecEntry::new(294, 1, 2, 5, 32), FecEntry::new(295, 1, 2, 5, 16),
    FecEntry::new(296, 1, 2, 5, 0), FecEntry::new(297, 1, 2, 7, 0), FecEntry::new(298, 1, 2, 7, 16), FecEntry::new(299, 1, 2, 7, 32),
    FecEntry::new(304, 1, 2, 0, 0), FecEntry::new(305, 1, 2, 0, 16), FecEntry::new(306, 1, 2, 0, 32), FecEntry::new(307, 1, 2, 2, 32),
    FecEntry::new(308, 1, 2, 2, 16), FecEntry::new(309, 1, 2, 2, 0), FecEntry::new(310, 1, 2, 4, 0), FecEntry::new(311, 1, 2, 4, 16),
    FecEntry::new(312, 1, 2, 4, 32), FecEntry::new(313, 1, 2, 6, 32), FecEntry::new(314, 1, 2, 6, 16), FecEntry::new(315, 1, 2, 6, 0),
    FecEntry::new(316, 1, 2, 8, 0), FecEntry::new(317, 1, 2, 8, 16), FecEntry::new(318, 1, 2, 8, 32),
    FecEntry::new(320, 1, 7, 0, 32), FecEntry::new(321, 1, 7, 0, 16), FecEntry::new(322, 1, 7, 0, 0), FecEntry::new(323, 1, 7, 2, 0),
    FecEntry::new(324, 1, 7, 2, 16), FecEntry::new(325, 1, 7, 2, 32), FecEntry::new(326, 1, 7, 4, 32), FecEntry::new(327, 1, 7, 4, 16),
    FecEntry::new(328, 1, 7, 4, 0), FecEntry::new(329, 1, 7, 6, 0), FecEntry::new(330, 1, 7, 6, 16), FecEntry::new(331, 1, 7, 6, 32),
    FecEntry::new(332, 1, 7, 8, 32), FecEntry::new(333, 1, 7, 8, 16), FecEntry::new(334, 1, 7, 8, 0), FecEntry::new(336, 1, 7, 1, 0),
    FecEntry::new(337, 1, 7, 1, 16), FecEntry::new(338, 1, 7, 1, 32), FecEntry::new(339, 1, 7, 3, 32), FecEntry::new(340, 1, 7, 3, 16),
    FecEntry::new(341, 1, 7, 3, 0), FecEntry::new(342, 1, 7, 5, 0), FecEntry::new(343, 1, 7, 5, 16), FecEntry::new(344, 1, 7, 5, 32),
    FecEntry::new(345, 1, 7, 7, 32), FecEntry::new(346, 1, 7, 7, 16), FecEntry::new(347, 1, 7, 7, 0),
    FecEntry::new(352, 1, 0, 1, 32), FecEntry::new(353, 1, 0, 1, 16), FecEntry::new(354, 1, 0, 1, 0), FecEntry::new(355, 1, 0, 3, 0),
    FecEntry::new(356, 1, 0, 3, 16), FecEntry::new(357, 1, 0, 3, 32), FecEntry::new(358, 1, 0, 5, 32), FecEntry::new(359, 1, 0, 5, 16),
    FecEntry::new(360, 1, 0, 5, 0), FecEntry::new(361, 1, 0, 7, 0), FecEntry::new(362, 1, 0, 7, 16), FecEntry::new(363, 1, 0, 7, 32),
    FecEntry::new(368, 1, 0, 0, 0), FecEntry::new(369, 1, 0, 0, 16), FecEntry::new(370, 1, 0, 0, 32), FecEntry::new(371, 1, 0, 2, 32),
    FecEntry::new(372, 1, 0, 2, 16), FecEntry::new(373, 1, 0, 2, 0), FecEntry::new(374, 1, 0, 4, 0), FecEntry::new(375, 1, 0, 4, 16),
    FecEntry::new(376, 1, 0, 4, 32), FecEntry::new(377, 1, 0, 6, 32), FecEntry::new(378, 1, 0, 6, 16), FecEntry::new(379, 1, 0, 6, 0),
    FecEntry::new(380, 1, 0, 8, 0), FecEntry::new(381, 1, 0, 8, 16), FecEntry::new(382, 1, 0, 8, 32),
    FecEntry::new(384, 1, 5, 1, 32), FecEntry::new(385, 1, 5, 1, 16), FecEntry::new(386, 1, 5, 1, 0), FecEntry::new(387, 1, 5, 3, 0),
    FecEntry::new(388, 1, 5, 3, 16), FecEntry::new(389, 1, 5, 3, 32), FecEntry::new(390, 1, 5, 5, 32), FecEntry::new(391, 1, 5, 5, 16),
    FecEntry::new(392, 1, 5, 5, 0), FecEntry::new(393, 1, 5, 7, 0), FecEntry::new(394, 1, 5, 7, 16), FecEntry::new(395, 1, 5, 7, 32),
    FecEntry::new(400, 1, 5, 0, 0), FecEntry::new(401, 1, 5, 0, 16), FecEntry::new(402, 1, 5, 0, 32), FecEntry::new(403, 1, 5, 2, 32),
    FecEntry::new(404, 1, 5, 2, 16), FecEntry::new(405, 1, 5, 2, 0), FecEntry::new(406, 1, 5, 4, 0), FecEntry::new(407, 1, 5, 4, 16),
    FecEntry::new(408, 1, 5, 4, 32), FecEntry::new(409, 1, 5, 6, 32), FecEntry::new(410, 1, 5, 6, 16), FecEntry::new(411, 1, 5, 6, 0),
    FecEntry::new(412, 1, 5, 8, 0), FecEntry::new(413, 1, 5, 8, 16), FecEntry::new(414, 1, 5, 8, 32),
    FecEntry::new(416, 1, 6, 1, 0), FecEntry::new(417, 1, 6, 1, 16), FecEntry::new(418, 1, 6, 1, 32), FecEntry::new(419, 1, 6, 3, 32),
    FecEntry::new(420, 1, 6, 3, 16), FecEntry::new(421, 1, 6, 3, 0), FecEntry::new(422, 1, 6, 5, 0), FecEntry::new(423, 1, 6, 5, 16),
    FecEntry::new(424, 1, 6, 5, 32), FecEntry::new(425, 1, 6, 7, 32), FecEntry::new(426, 1, 6, 7, 16), FecEntry::new(427, 1, 6, 7, 0),
    FecEntry::new(432, 1, 6, 0, 32), FecEntry::new(433, 1, 6, 0, 16), FecEntry::new(434, 1, 6, 0, 0), FecEntry::new(435, 1, 6, 2, 0),
    FecEntry::new(436, 1, 6, 2, 16), FecEntry::new(437, 1, 6, 2, 32), FecEntry::new(438, 1, 6, 4, 32), FecEntry::new(439, 1, 6, 4, 16),
    FecEntry::new(440, 1, 6, 4, 0), FecEntry::new(441, 1, 6, 6, 0), FecEntry::new(442, 1, 6, 6, 16), FecEntry::new(443, 1, 6, 6, 32),
    FecEntry::new(444, 1, 6, 8, 32), FecEntry::new(445, 1, 6, 8, 16), FecEntry::new(446, 1, 6, 8, 0),
    FecEntry::new(448, 1, 4, 0, 32), FecEntry::new(449, 1, 4, 0, 16), FecEntry::new(450, 1, 4, 0, 0), FecEntry::new(451, 1, 4, 2, 0),
    FecEntry::new(452, 1, 4, 2, 16), FecEntry::new(453, 1, 4, 2, 32), FecEntry::new(454, 1, 4, 4, 32), FecEntry::new(455, 1, 4, 4, 16),
    FecEntry::new(456, 1, 4, 4, 0), FecEntry::new(457, 1, 4, 6, 0), FecEntry::new(458, 1, 4, 6, 16), FecEntry::new(459, 1, 4, 6, 32),
    FecEntry::new(460, 1, 4, 8, 32), FecEntry::new(461, 1, 4, 8, 16), FecEntry::new(462, 1, 4, 8, 0), FecEntry::new(464, 1, 4, 1, 0),
    FecEntry::new(465, 1, 4, 1, 16), FecEntry::new(466, 1, 4, 1, 32), FecEntry::new(467, 1, 4, 3, 32), FecEntry::new(468, 1, 4, 3, 16),
    FecEntry::new(469, 1, 4, 3, 0), FecEntry::new(470, 1, 4, 5, 0), FecEntry::new(471, 1, 4, 5, 16), FecEntry::new(472, 1, 4, 5, 32),
    FecEntry::new(473, 1, 4, 7, 32), FecEntry::new(474, 1, 4, 7, 16), FecEntry::new(475, 1, 4, 7, 0),
    FecEntry::new(480, 1, 3, 1, 0), FecEntry::new(481, 1, 3, 1, 16), FecEntry::new(482, 1, 3, 1, 32), FecEntry::new(483, 1, 3, 3, 32),
    FecEntry::new(484, 1, 3, 3, 16), FecEntry::new(485, 1, 3, 3, 0), FecEntry::new(486, 1, 3, 5, 0), FecEntry::new(487, 1, 3, 5, 16),
    FecEntry::new(488, 1, 3, 5, 32), FecEntry::new(489, 1, 3, 7, 32), FecEntry::new(490, 1, 3, 7, 16), FecEntry::new(491, 1, 3, 7, 0),
    FecEntry::new(496, 1, 3, 0, 32), FecEntry::new(497, 1, 3, 0, 16), FecEntry::new(498, 1, 3, 0, 0), FecEntry::new(499, 1, 3, 2, 0),
    FecEntry::new(500, 1, 3, 2, 16), FecEntry::new(501, 1, 3, 2, 32), FecEntry::new(502, 1, 3, 4, 32), FecEntry::new(503, 1, 3, 4, 16),
    FecEntry::new(504, 1, 3, 4, 0), FecEntry::new(505, 1, 3, 6, 0), FecEntry::new(506, 1, 3, 6, 16), FecEntry::new(507, 1, 3, 6, 32),
    FecEntry::new(508, 1, 3, 8, 32), FecEntry::new(509, 1, 3, 8, 16), FecEntry::new(510, 1, 3, 8, 0),
    FecEntry::new(512, 2, 1, 3, 48), FecEntry::new(513, 2, 1, 3, 32), FecEntry::new(514, 2, 1, 3, 16), FecEntry::new(515, 2, 1, 3, 0),
    FecEntry::new(516, 2, 1, 2, 48), FecEntry::new(517, 2, 1, 2, 32), FecEntry::new(518, 2, 1, 2, 16), FecEntry::new(519, 2, 1, 2, 0),
    FecEntry::new(520, 2, 1, 1, 48), FecEntry::new(521, 2, 1, 1, 32), FecEntry::new(522, 2, 1, 1, 16), FecEntry::new(523, 2, 1, 1, 0),
    FecEntry::new(524, 2, 1, 0, 48), FecEntry::new(525, 2, 1, 0, 32), FecEntry::new(526, 2, 1, 0, 16), FecEntry::new(527, 2, 1, 0, 0),
    FecEntry::new(528, 2, 1, 7, 48), FecEntry::new(529, 2, 1, 7, 32), FecEntry::new(530, 2, 1, 7, 16), FecEntry::new(531, 2, 1, 7, 0),
    FecEntry::new(532, 2, 1, 6, 48), FecEntry::new(533, 2, 1, 6, 32), FecEntry::new(534, 2, 1, 6, 16), FecEntry::new(535, 2, 1, 6, 0),
    FecEntry::new(536, 2, 1, 5, 48), FecEntry::new(537, 2, 1, 5, 32), FecEntry::new(538, 2, 1, 5, 16), FecEntry::new(539, 2, 1, 5, 0),
    FecEntry::new(540, 2, 1, 4, 48), FecEntry::new(541, 2, 1, 4, 32), FecEntry::new(542, 2, 1, 4, 16), FecEntry::new(543, 2, 1, 4, 0),
    FecEntry::new(544, 2, 2, 3, 48), FecEntry::new(545, 2, 2, 3, 32), FecEntry::new(546, 2, 2, 3, 16), FecEntry::new(547, 2, 2, 3, 0),
    FecEntry::new(548, 2, 2, 2, 48), FecEntry::new(549, 2, 2, 2, 32), FecEntry::new(550, 2, 2, 2, 16), FecEntry::new(551, 2, 2, 2, 0),
    FecEntry::new(552, 2, 2, 1, 48), FecEntry::new(553, 2, 2, 1, 32), FecEntry::new(554, 2, 2, 1, 16), FecEntry::new(555, 2, 2, 1, 0),
    FecEntry::new(556, 2, 2, 0, 48), FecEntry::new(557, 2, 2, 0, 32), FecEntry::new(558, 2, 2, 0, 16), FecEntry::new(559, 2, 2, 0, 0),
    FecEntry::new(560, 2, 2, 7, 48), FecEntry::new(561, 2, 2, 7, 32), FecEntry::new(562, 2, 2, 7, 16), FecEntry::new(563, 2, 2, 7, 0),
    FecEntry::new(564, 2, 2, 6, 48), FecEntry::new(565, 2, 2, 6, 32), FecEntry::new(566, 2, 2, 6, 16), FecEntry::new(567, 2, 2, 6, 0),
    FecEntry::new(568, 2, 2, 5, 48), FecEntry::new(569, 2, 2, 5, 32), FecEntry::new(570, 2, 2, 5, 16), FecEntry::new(571, 2, 2, 5, 0),
    FecEntry::new(572, 2, 2, 4, 48), FecEntry::new(573, 2, 2, 4, 32), FecEntry::new(574, 2, 2, 4, 16), FecEntry::new(575, 2, 2, 4, 0),
    FecEntry::new(576, 2, 0, 7, 48), FecEntry::new(577, 2, 0, 7, 32), FecEntry::new(578, 2, 0, 7, 16), FecEntry::new(579, 2, 0, 7, 0),
    FecEntry::new(580, 2, 0, 6, 48), FecEntry::new(581, 2, 0, 6, 32), FecEntry::new(582, 2, 0, 6, 16), FecEntry::new(583, 2, 0, 6, 0),
    FecEntry::new(584, 2, 0, 5, 48), FecEntry::new(585, 2, 0, 5, 32), FecEntry::new(586, 2, 0, 5, 16), FecEntry::new(587, 2, 0, 5, 0),
    FecEntry::new(588, 2, 0, 4, 48), FecEntry::new(589, 2, 0, 4, 32), FecEntry::new(590, 2, 0, 4, 16), FecEntry::new(591, 2, 0, 4, 0),
    FecEntry::new(592, 2, 3, 3, 48), FecEntry::new(593, 2, 3, 3, 32), FecEntry::new(594, 2, 3, 3, 16), FecEntry::new(595, 2, 3, 3, 0),
    FecEntry::new(596, 2, 3, 2, 48), FecEntry::new(597, 2, 3, 2, 32), FecEntry::new(598, 2, 3, 2, 16), FecEntry::new(599, 2, 3, 2, 0),
    FecEntry::new(600, 2, 3, 1, 48), FecEntry::new(601, 2, 3, 1, 32), FecEntry::new(602, 2, 3, 1, 16), FecEntry::new(603, 2, 3, 1, 0),
    FecEntry::new(604, 2, 3, 0, 48), FecEntry::new(605, 2, 3, 0, 32), FecEntry::new(606, 2, 3, 0, 16), FecEntry::new(607, 2, 3, 0, 0),
    FecEntry::new(608, 2, 3, 7, 48), FecEntry::new(609, 2, 3, 7, 32), FecEntry::new(610, 2, 3, 7, 16), FecEntry::new(611, 2, 3, 7, 0),
    FecEntry::new(612, 2, 3, 6, 48), FecEntry::new(613, 2, 3, 6, 32), FecEntry::new(614, 2, 3, 6, 16), FecEntry::new(615, 2, 3, 6, 0),
    FecEntry::new(616, 2, 3, 5, 48), FecEntry::new(617, 2, 3, 5, 32), FecEntry::new(618, 2, 3, 5, 16), FecEntry::new(619, 2, 3, 5, 0),
    FecEntry::new(620, 2, 3, 4, 48), FecEntry::new(621, 2, 3, 4, 32), FecEntry::new(622, 2, 3, 4, 16), FecEntry::new(623, 2, 3, 4, 0),
    FecEntry::new(624, 2, 0, 3, 48), FecEntry::new(625, 2, 0, 3, 32), FecEntry::new(626, 2, 0, 3, 16), FecEntry::new(627, 2, 0, 3, 0),
    FecEntry::new(628, 2, 0, 2, 48), FecEntry::new(629, 2, 0, 2, 32), FecEntry::new(630, 2, 0, 2, 16), FecEntry::new(631, 2, 0, 2, 0),
    FecEntry::new(632, 2, 0, 1, 48), FecEntry::new(633, 2, 0, 1, 32), FecEntry::new(634, 2, 0, 1, 16), FecEntry::new(635, 2, 0, 1, 0),
    FecEntry::new(636, 2, 0, 0, 48), FecEntry::new(637, 2, 0, 0, 32), FecEntry::new(638, 2, 0, 0, 16), FecEntry::new(639, 2, 0, 0, 0),
];
